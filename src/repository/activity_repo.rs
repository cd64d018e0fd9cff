use crate::model::activity::Activity;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

/// Append-only store. There is deliberately no update or delete surface.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn append(&self, activity: Activity) -> RepositoryResult<Activity>;
    async fn list(&self, limit: i64) -> RepositoryResult<Vec<Activity>>;
    async fn list_by_lead(&self, lead: ObjectId) -> RepositoryResult<Vec<Activity>>;
    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Activity>>;
    async fn list_by_project(&self, project: ObjectId) -> RepositoryResult<Vec<Activity>>;
    async fn list_by_task(&self, task: ObjectId) -> RepositoryResult<Vec<Activity>>;
}

pub struct MongoActivityRepository {
    collection: mongodb::Collection<Activity>,
}

impl MongoActivityRepository {
    pub fn new(db: &Database) -> Self {
        MongoActivityRepository { collection: db.collection::<Activity>("activities") }
    }

    /// Entries filtered on one correlated entity, newest first.
    async fn list_filtered(&self, filter: Document) -> RepositoryResult<Vec<Activity>> {
        let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list activities: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize activity: {}", e)))
    }
}

#[async_trait]
impl ActivityRepository for MongoActivityRepository {
    #[tracing::instrument(skip(self, activity), fields(activity_type = ?activity.activity_type))]
    async fn append(&self, activity: Activity) -> RepositoryResult<Activity> {
        let mut new_activity = activity;
        new_activity.id = Some(ObjectId::new());
        if new_activity.date.is_none() {
            new_activity.date = Some(chrono::Utc::now().to_rfc3339());
        }
        match self.collection.insert_one(new_activity.clone(), None).await {
            Ok(_) => {
                info!("Activity recorded");
                Ok(new_activity)
            }
            Err(e) => {
                error!("Failed to record activity: {}", e);
                Err(RepositoryError::database(format!("Failed to record activity: {}", e)))
            }
        }
    }

    async fn list(&self, limit: i64) -> RepositoryResult<Vec<Activity>> {
        let options = FindOptions::builder().sort(doc! { "date": -1 }).limit(limit).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list activities: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize activity: {}", e)))
    }

    async fn list_by_lead(&self, lead: ObjectId) -> RepositoryResult<Vec<Activity>> {
        self.list_filtered(doc! { "lead": lead }).await
    }

    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Activity>> {
        self.list_filtered(doc! { "client": client }).await
    }

    async fn list_by_project(&self, project: ObjectId) -> RepositoryResult<Vec<Activity>> {
        self.list_filtered(doc! { "project": project }).await
    }

    async fn list_by_task(&self, task: ObjectId) -> RepositoryResult<Vec<Activity>> {
        self.list_filtered(doc! { "task": task }).await
    }
}
