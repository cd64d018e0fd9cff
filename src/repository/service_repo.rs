use crate::model::service::{Category, ServiceOffering};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: ServiceOffering) -> RepositoryResult<ServiceOffering>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ServiceOffering>;
    async fn update(&self, id: ObjectId, service: ServiceOffering) -> RepositoryResult<ServiceOffering>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<ServiceOffering>>;
}

pub struct MongoServiceRepository {
    collection: mongodb::Collection<ServiceOffering>,
}

impl MongoServiceRepository {
    pub fn new(db: &Database) -> Self {
        MongoServiceRepository { collection: db.collection::<ServiceOffering>("services") }
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn create(&self, mut service: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        service.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        service.createdAt = Some(now.clone());
        service.updatedAt = Some(now);
        self.collection.insert_one(service.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(service)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ServiceOffering> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch service: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Service not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, service: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        let mut doc = bson::to_document(&service)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize service: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No service found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete service: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No service found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<ServiceOffering>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list services: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize service: {}", e)))
    }
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: Category) -> RepositoryResult<Category>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Category>>;
}

pub struct MongoCategoryRepository {
    collection: mongodb::Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        MongoCategoryRepository { collection: db.collection::<Category>("categories") }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn create(&self, mut category: Category) -> RepositoryResult<Category> {
        category.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        category.createdAt = Some(now.clone());
        category.updatedAt = Some(now);
        self.collection.insert_one(category.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(category)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete category: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No category found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Category>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list categories: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize category: {}", e)))
    }
}
