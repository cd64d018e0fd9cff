use crate::model::expense::Expense;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(&self, expense: Expense) -> RepositoryResult<Expense>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Expense>;
    async fn update(&self, id: ObjectId, expense: Expense) -> RepositoryResult<Expense>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Expense>;
    async fn list(&self) -> RepositoryResult<Vec<Expense>>;
}

pub struct MongoExpenseRepository {
    collection: mongodb::Collection<Expense>,
}

impl MongoExpenseRepository {
    pub fn new(db: &Database) -> Self {
        MongoExpenseRepository { collection: db.collection::<Expense>("expenses") }
    }
}

#[async_trait]
impl ExpenseRepository for MongoExpenseRepository {
    async fn create(&self, mut expense: Expense) -> RepositoryResult<Expense> {
        expense.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        expense.createdAt = Some(now.clone());
        expense.updatedAt = Some(now);
        self.collection.insert_one(expense.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(expense)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Expense> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch expense: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Expense not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, expense: Expense) -> RepositoryResult<Expense> {
        let mut doc = bson::to_document(&expense)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize expense: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No expense found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<Expense> {
        let deleted = self.get_by_id(id).await?;
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete expense: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No expense found to delete for ID: {}", id)));
        }
        Ok(deleted)
    }

    async fn list(&self) -> RepositoryResult<Vec<Expense>> {
        let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list expenses: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize expense: {}", e)))
    }
}
