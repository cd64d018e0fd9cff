use crate::model::quotation::{Quotation, QuotationStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOneOptions, FindOptions, IndexOptions};
use mongodb::{Database, IndexModel};
use tracing::{error, info};

#[async_trait]
pub trait QuotationRepository: Send + Sync {
    async fn create(&self, quotation: Quotation) -> RepositoryResult<Quotation>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quotation>;
    async fn update(&self, id: ObjectId, quotation: Quotation) -> RepositoryResult<Quotation>;
    async fn update_status(&self, id: ObjectId, status: QuotationStatus) -> RepositoryResult<Quotation>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Quotation>>;
    /// quotationId of the most recently created quotation, if any. The
    /// generator derives the next ID from it; creation order is the proxy
    /// for the highest issued number.
    async fn latest_quotation_id(&self) -> RepositoryResult<Option<String>>;
}

pub struct MongoQuotationRepository {
    collection: mongodb::Collection<Quotation>,
}

impl MongoQuotationRepository {
    pub fn new(db: &Database) -> Self {
        MongoQuotationRepository { collection: db.collection::<Quotation>("quotations") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "quotationId": 1 })
            .options(options)
            .build();
        self.collection.create_index(model, None).await.map_err(RepositoryError::from)?;
        Ok(())
    }
}

#[async_trait]
impl QuotationRepository for MongoQuotationRepository {
    #[tracing::instrument(skip(self, quotation), fields(quotation_id = %quotation.quotationId))]
    async fn create(&self, quotation: Quotation) -> RepositoryResult<Quotation> {
        info!("Creating new quotation");
        let mut new_quotation = quotation;
        new_quotation.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_quotation.createdAt = Some(now.clone());
        new_quotation.updatedAt = Some(now);

        match self.collection.insert_one(new_quotation.clone(), None).await {
            Ok(_) => {
                info!("Quotation created successfully");
                Ok(new_quotation)
            }
            Err(e) => {
                error!("Failed to create quotation: {}", e);
                // E11000 on quotationId becomes AlreadyExists and is retried upstream
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quotation> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(quotation)) => Ok(quotation),
            Ok(None) => Err(RepositoryError::not_found(format!("Quotation not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch quotation by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch quotation by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, quotation), fields(id = %id))]
    async fn update(&self, id: ObjectId, quotation: Quotation) -> RepositoryResult<Quotation> {
        info!("Updating quotation with ID: {}", id);
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&quotation)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize quotation: {}", e)))?;
        doc.remove("_id");
        // quotationId is immutable after creation
        doc.remove("quotationId");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Quotation updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => {
                error!("No quotation found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!("No quotation found to update for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to update quotation: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn update_status(&self, id: ObjectId, status: QuotationStatus) -> RepositoryResult<Quotation> {
        info!(quotation_id = %id, ?status, "Updating quotation status");
        let status_bson = bson::to_bson(&status)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize status: {}", e)))?;
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "status": status_bson, "updatedAt": chrono::Utc::now().to_rfc3339() } };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("No quotation found to update status for ID: {}", id))),
            Err(e) => {
                error!("Failed to update quotation status: {}", e);
                Err(RepositoryError::database(format!("Failed to update quotation status: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting quotation with ID: {}", id);
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!("No quotation found to delete for ID: {}", id))),
            Err(e) => {
                error!("Failed to delete quotation: {}", e);
                Err(RepositoryError::database(format!("Failed to delete quotation: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Quotation>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list quotations: {}", e)))?;
        let quotations: Vec<Quotation> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize quotation: {}", e)))?;
        info!("Fetched {} quotations", quotations.len());
        Ok(quotations)
    }

    #[tracing::instrument(skip(self))]
    async fn latest_quotation_id(&self) -> RepositoryResult<Option<String>> {
        let options = FindOneOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let latest = self
            .collection
            .find_one(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch latest quotation: {}", e)))?;
        Ok(latest.map(|quotation| quotation.quotationId))
    }
}
