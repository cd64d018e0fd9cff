use crate::model::invoice::Invoice;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Database, IndexModel};
use tracing::{error, info};

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn create(&self, invoice: Invoice) -> RepositoryResult<Invoice>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Invoice>;
    async fn find_by_number(&self, invoice_number: &str) -> RepositoryResult<Option<Invoice>>;
    async fn update(&self, id: ObjectId, invoice: Invoice) -> RepositoryResult<Invoice>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Invoice>;
    async fn list(&self) -> RepositoryResult<Vec<Invoice>>;
}

pub struct MongoInvoiceRepository {
    collection: mongodb::Collection<Invoice>,
}

impl MongoInvoiceRepository {
    pub fn new(db: &Database) -> Self {
        MongoInvoiceRepository { collection: db.collection::<Invoice>("invoices") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "invoiceNumber": 1 })
            .options(options)
            .build();
        self.collection.create_index(model, None).await.map_err(RepositoryError::from)?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for MongoInvoiceRepository {
    #[tracing::instrument(skip(self, invoice), fields(invoice_number = %invoice.invoiceNumber))]
    async fn create(&self, invoice: Invoice) -> RepositoryResult<Invoice> {
        info!("Creating new invoice");
        let mut new_invoice = invoice;
        new_invoice.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_invoice.createdAt = Some(now.clone());
        new_invoice.updatedAt = Some(now);

        match self.collection.insert_one(new_invoice.clone(), None).await {
            Ok(_) => {
                info!("Invoice created successfully");
                Ok(new_invoice)
            }
            Err(e) => {
                error!("Failed to create invoice: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Invoice> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(invoice)) => Ok(invoice),
            Ok(None) => Err(RepositoryError::not_found(format!("Invoice not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch invoice by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch invoice by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_number(&self, invoice_number: &str) -> RepositoryResult<Option<Invoice>> {
        let filter = doc! { "invoiceNumber": invoice_number };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch invoice by number: {}", e)))
    }

    #[tracing::instrument(skip(self, invoice), fields(id = %id))]
    async fn update(&self, id: ObjectId, invoice: Invoice) -> RepositoryResult<Invoice> {
        info!("Updating invoice with ID: {}", id);
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&invoice)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize invoice: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Invoice updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => Err(RepositoryError::not_found(format!("No invoice found to update for ID: {}", id))),
            Err(e) => {
                error!("Failed to update invoice: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Invoice> {
        info!("Deleting invoice with ID: {}", id);
        // Return the deleted document so callers can log its number/client
        let deleted = self.get_by_id(id).await?;
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(deleted),
            Ok(_) => Err(RepositoryError::not_found(format!("No invoice found to delete for ID: {}", id))),
            Err(e) => {
                error!("Failed to delete invoice: {}", e);
                Err(RepositoryError::database(format!("Failed to delete invoice: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Invoice>> {
        let options = FindOptions::builder().sort(doc! { "issueDate": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list invoices: {}", e)))?;
        let invoices: Vec<Invoice> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize invoice: {}", e)))?;
        info!("Fetched {} invoices", invoices.len());
        Ok(invoices)
    }
}
