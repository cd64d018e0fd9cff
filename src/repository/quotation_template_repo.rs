use crate::model::quotation::QuotationTemplate;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait QuotationTemplateRepository: Send + Sync {
    async fn create(&self, template: QuotationTemplate) -> RepositoryResult<QuotationTemplate>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<QuotationTemplate>;
    async fn update(&self, id: ObjectId, template: QuotationTemplate) -> RepositoryResult<QuotationTemplate>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<QuotationTemplate>>;
}

pub struct MongoQuotationTemplateRepository {
    collection: mongodb::Collection<QuotationTemplate>,
}

impl MongoQuotationTemplateRepository {
    pub fn new(db: &Database) -> Self {
        MongoQuotationTemplateRepository {
            collection: db.collection::<QuotationTemplate>("quotationtemplates"),
        }
    }
}

#[async_trait]
impl QuotationTemplateRepository for MongoQuotationTemplateRepository {
    async fn create(&self, mut template: QuotationTemplate) -> RepositoryResult<QuotationTemplate> {
        template.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        template.createdAt = Some(now.clone());
        template.updatedAt = Some(now);
        self.collection.insert_one(template.clone(), None).await.map_err(RepositoryError::from)?;
        Ok(template)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<QuotationTemplate> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch template: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Quotation template not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, template: QuotationTemplate) -> RepositoryResult<QuotationTemplate> {
        let mut doc = bson::to_document(&template)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize template: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No template found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete template: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No template found to delete for ID: {}", id)));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<QuotationTemplate>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list templates: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize template: {}", e)))
    }
}
