use crate::model::contact_person::ContactPerson;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait ContactPersonRepository: Send + Sync {
    async fn create(&self, contact: ContactPerson) -> RepositoryResult<ContactPerson>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactPerson>;
    async fn update(&self, id: ObjectId, contact: ContactPerson) -> RepositoryResult<ContactPerson>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<ContactPerson>;
    async fn list(&self) -> RepositoryResult<Vec<ContactPerson>>;
    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<ContactPerson>>;
}

pub struct MongoContactPersonRepository {
    collection: mongodb::Collection<ContactPerson>,
}

impl MongoContactPersonRepository {
    pub fn new(db: &Database) -> Self {
        MongoContactPersonRepository { collection: db.collection::<ContactPerson>("contactpersons") }
    }

    async fn collect_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<ContactPerson>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list contact persons: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize contact person: {}", e)))
    }
}

#[async_trait]
impl ContactPersonRepository for MongoContactPersonRepository {
    async fn create(&self, mut contact: ContactPerson) -> RepositoryResult<ContactPerson> {
        contact.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        contact.createdAt = Some(now.clone());
        contact.updatedAt = Some(now);
        self.collection.insert_one(contact.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(contact)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactPerson> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch contact person: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Contact person not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, contact: ContactPerson) -> RepositoryResult<ContactPerson> {
        let mut doc = bson::to_document(&contact)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize contact person: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No contact person found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<ContactPerson> {
        let deleted = self.get_by_id(id).await?;
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete contact person: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No contact person found to delete for ID: {}", id)));
        }
        Ok(deleted)
    }

    async fn list(&self) -> RepositoryResult<Vec<ContactPerson>> {
        self.collect_sorted(None).await
    }

    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<ContactPerson>> {
        self.collect_sorted(Some(doc! { "linkedClient": client })).await
    }
}
