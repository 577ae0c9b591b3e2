mod response;
mod submission;

pub use response::*;
pub use submission::*;
