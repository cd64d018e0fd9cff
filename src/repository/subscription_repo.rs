use crate::model::common::Note;
use crate::model::subscription::Subscription;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, subscription: Subscription) -> RepositoryResult<Subscription>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Subscription>;
    async fn update(&self, id: ObjectId, subscription: Subscription) -> RepositoryResult<Subscription>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Subscription>;
    async fn list(&self) -> RepositoryResult<Vec<Subscription>>;
    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Subscription>>;
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Subscription>;
}

pub struct MongoSubscriptionRepository {
    collection: mongodb::Collection<Subscription>,
}

impl MongoSubscriptionRepository {
    pub fn new(db: &Database) -> Self {
        MongoSubscriptionRepository { collection: db.collection::<Subscription>("subscriptions") }
    }

    async fn collect_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<Subscription>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list subscriptions: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize subscription: {}", e)))
    }
}

#[async_trait]
impl SubscriptionRepository for MongoSubscriptionRepository {
    async fn create(&self, mut subscription: Subscription) -> RepositoryResult<Subscription> {
        subscription.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        subscription.createdAt = Some(now.clone());
        subscription.updatedAt = Some(now);
        self.collection
            .insert_one(subscription.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(subscription)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Subscription> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch subscription: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Subscription not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, subscription: Subscription) -> RepositoryResult<Subscription> {
        let mut doc = bson::to_document(&subscription)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize subscription: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No subscription found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<Subscription> {
        let deleted = self.get_by_id(id).await?;
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete subscription: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No subscription found to delete for ID: {}", id)));
        }
        Ok(deleted)
    }

    async fn list(&self) -> RepositoryResult<Vec<Subscription>> {
        self.collect_sorted(None).await
    }

    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Subscription>> {
        self.collect_sorted(Some(doc! { "client": client })).await
    }

    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Subscription> {
        let note_doc = bson::to_bson(&note)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize note: {}", e)))?;
        let update = doc! {
            "$push": { "Notes": note_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to add note to subscription: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("Subscription not found for ID: {}", id)));
        }
        self.get_by_id(id).await
    }
}
