use crate::model::task::Task;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: Task) -> RepositoryResult<Task>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Task>;
    async fn update(&self, id: ObjectId, task: Task) -> RepositoryResult<Task>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Task>;
    async fn list(&self) -> RepositoryResult<Vec<Task>>;
    async fn list_by_project(&self, project: ObjectId) -> RepositoryResult<Vec<Task>>;
}

pub struct MongoTaskRepository {
    collection: mongodb::Collection<Task>,
}

impl MongoTaskRepository {
    pub fn new(db: &Database) -> Self {
        MongoTaskRepository { collection: db.collection::<Task>("tasks") }
    }

    async fn collect_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<Task>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list tasks: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize task: {}", e)))
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    async fn create(&self, mut task: Task) -> RepositoryResult<Task> {
        task.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        task.createdAt = Some(now.clone());
        task.updatedAt = Some(now);
        self.collection.insert_one(task.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(task)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Task> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch task: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Task not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, task: Task) -> RepositoryResult<Task> {
        let mut doc = bson::to_document(&task)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize task: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No task found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<Task> {
        let deleted = self.get_by_id(id).await?;
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete task: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No task found to delete for ID: {}", id)));
        }
        Ok(deleted)
    }

    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        self.collect_sorted(None).await
    }

    async fn list_by_project(&self, project: ObjectId) -> RepositoryResult<Vec<Task>> {
        self.collect_sorted(Some(doc! { "project": project })).await
    }
}
