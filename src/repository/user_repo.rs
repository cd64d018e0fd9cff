use crate::model::user::User;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Database, IndexModel};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>>;
    async fn list(&self) -> RepositoryResult<Vec<User>>;
}

pub struct MongoUserRepository {
    collection: mongodb::Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        MongoUserRepository { collection: db.collection::<User>("users") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder().keys(doc! { "email": 1 }).options(options).build();
        self.collection.create_index(model, None).await.map_err(RepositoryError::from)?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        user.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        user.createdAt = Some(now.clone());
        user.updatedAt = Some(now);
        self.collection
            .insert_one(user.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(user)
    }

    async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&user)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize user: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        let result = self.collection.update_one(filter, update, None).await.map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No user found to update for ID: {}", id)));
        }
        Ok(user)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete user: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No user found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        let filter = doc! { "_id": id };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by id: {}", e)))?;
        Ok(user)
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list users: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize user: {}", e)))
    }
}
