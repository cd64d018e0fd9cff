use crate::model::ticket::{Ticket, TicketComment};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create(&self, ticket: Ticket) -> RepositoryResult<Ticket>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Ticket>;
    async fn update(&self, id: ObjectId, ticket: Ticket) -> RepositoryResult<Ticket>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Ticket>>;
    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Ticket>>;
    async fn push_comment(&self, id: ObjectId, comment: TicketComment) -> RepositoryResult<Ticket>;
}

pub struct MongoTicketRepository {
    collection: mongodb::Collection<Ticket>,
}

impl MongoTicketRepository {
    pub fn new(db: &Database) -> Self {
        MongoTicketRepository { collection: db.collection::<Ticket>("tickets") }
    }

    async fn collect_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<Ticket>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list tickets: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize ticket: {}", e)))
    }
}

#[async_trait]
impl TicketRepository for MongoTicketRepository {
    async fn create(&self, mut ticket: Ticket) -> RepositoryResult<Ticket> {
        ticket.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        ticket.createdAt = Some(now.clone());
        ticket.updatedAt = Some(now);
        self.collection.insert_one(ticket.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(ticket)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Ticket> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch ticket: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Ticket not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, ticket: Ticket) -> RepositoryResult<Ticket> {
        let mut doc = bson::to_document(&ticket)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize ticket: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No ticket found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete ticket: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No ticket found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Ticket>> {
        self.collect_sorted(None).await
    }

    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Ticket>> {
        self.collect_sorted(Some(doc! { "client": client })).await
    }

    async fn push_comment(&self, id: ObjectId, comment: TicketComment) -> RepositoryResult<Ticket> {
        let comment_doc = bson::to_bson(&comment)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize comment: {}", e)))?;
        let update = doc! {
            "$push": { "comments": comment_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to add comment to ticket: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("Ticket not found for ID: {}", id)));
        }
        self.get_by_id(id).await
    }
}
