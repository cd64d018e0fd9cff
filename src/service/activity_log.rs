//! Best-effort audit trail.
//!
//! `record` appends one immutable entry. A failed write is logged and
//! swallowed: the mutation that triggered it has already happened and must
//! still be reported as successful to the caller. This is an explicit
//! contract, not an accident of error handling — the log is for audit
//! convenience, not transactional consistency.

use std::sync::Arc;

use bson::oid::ObjectId;
use tracing::{info, warn};

use crate::model::activity::Activity;
use crate::repository::activity_repo::ActivityRepository;
use crate::util::error::ServiceError;

pub struct ActivityLog {
    repo: Arc<dyn ActivityRepository>,
}

impl ActivityLog {
    pub fn new(repo: Arc<dyn ActivityRepository>) -> Self {
        ActivityLog { repo }
    }

    /// Append one entry; never fails the caller.
    pub async fn record(&self, activity: Activity) {
        let activity_type = activity.activity_type;
        match self.repo.append(activity).await {
            Ok(_) => info!(?activity_type, "Activity recorded"),
            Err(e) => warn!(?activity_type, "Failed to record activity (ignored): {}", e),
        }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list(limit).await.map_err(ServiceError::from)
    }

    pub async fn list_for_lead(&self, lead: ObjectId) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list_by_lead(lead).await.map_err(ServiceError::from)
    }

    pub async fn list_for_client(&self, client: ObjectId) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list_by_client(client).await.map_err(ServiceError::from)
    }

    pub async fn list_for_project(&self, project: ObjectId) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list_by_project(project).await.map_err(ServiceError::from)
    }

    pub async fn list_for_task(&self, task: ObjectId) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list_by_task(task).await.map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::ActivityType;
    use crate::repository::repository_error::{RepositoryError, RepositoryResult};
    use async_trait::async_trait;

    struct FailingActivityRepository;

    #[async_trait]
    impl ActivityRepository for FailingActivityRepository {
        async fn append(&self, _activity: Activity) -> RepositoryResult<Activity> {
            Err(RepositoryError::database("activity store is down"))
        }
        async fn list(&self, _limit: i64) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_lead(&self, _lead: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_client(&self, _client: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_project(&self, _project: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_task(&self, _task: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn record_swallows_repository_failures() {
        let log = ActivityLog::new(Arc::new(FailingActivityRepository));
        // Must not panic or propagate the error
        log.record(Activity::for_client(
            ActivityType::ClientCreated,
            "Client created",
            None,
            ObjectId::new(),
        ))
        .await;
    }
}
