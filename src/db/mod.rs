pub mod memory;
pub mod submissions;

pub use memory::MemorySubmissionStore;
pub use submissions::{DynamoSubmissionStore, SubmissionStore};
