use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::error::StoreError;
use crate::models::UserSubmission;

/// Write side of the submissions table.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one record. No existence check, no retry.
    async fn put(&self, record: &UserSubmission) -> Result<(), StoreError>;
}

/// DynamoDB table with partition key `user_id` (S).
pub struct DynamoSubmissionStore {
    client: Client,
    table_name: String,
}

impl DynamoSubmissionStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl SubmissionStore for DynamoSubmissionStore {
    async fn put(&self, record: &UserSubmission) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("user_id", AttributeValue::S(record.user_id.to_string()))
            .item("student_name", AttributeValue::S(record.student_name.clone()))
            .item("parent_name", AttributeValue::S(record.parent_name.clone()))
            .item("email", AttributeValue::S(record.email.clone()))
            .item("course_name", AttributeValue::S(record.course_name.clone()))
            .item(
                "additional_info",
                AttributeValue::S(record.additional_info.clone()),
            )
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }
}
