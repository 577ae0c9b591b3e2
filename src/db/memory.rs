use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::UserSubmission;

use super::submissions::SubmissionStore;

/// Process-local store for the local server and tests.
#[derive(Default)]
pub struct MemorySubmissionStore {
    records: DashMap<Uuid, UserSubmission>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, user_id: &Uuid) -> Option<UserSubmission> {
        self.records.get(user_id).map(|r| r.value().clone())
    }

    pub fn all(&self) -> Vec<UserSubmission> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn put(&self, record: &UserSubmission) -> Result<(), StoreError> {
        self.records.insert(record.user_id, record.clone());
        Ok(())
    }
}
