use crate::model::event::Event;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: Event) -> RepositoryResult<Event>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Event>;
    async fn update(&self, id: ObjectId, event: Event) -> RepositoryResult<Event>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<Event>>;
}

pub struct MongoEventRepository {
    collection: mongodb::Collection<Event>,
}

impl MongoEventRepository {
    pub fn new(db: &Database) -> Self {
        MongoEventRepository { collection: db.collection::<Event>("events") }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    async fn create(&self, mut event: Event) -> RepositoryResult<Event> {
        event.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        event.createdAt = Some(now.clone());
        event.updatedAt = Some(now);
        self.collection.insert_one(event.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(event)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Event> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch event: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Event not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, event: Event) -> RepositoryResult<Event> {
        let mut doc = bson::to_document(&event)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize event: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No event found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete event: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No event found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<Event>> {
        let options = FindOptions::builder().sort(doc! { "start": 1 }).build();
        let cursor = self
            .collection
            .find(doc! { "userId": user }, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list events: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize event: {}", e)))
    }
}
