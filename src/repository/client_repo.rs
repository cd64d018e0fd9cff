use crate::model::client::Client;
use crate::model::common::{Note, Reminder};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOneOptions, FindOptions, IndexOptions};
use mongodb::{Database, IndexModel};
use tracing::{error, info};

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: Client) -> RepositoryResult<Client>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Client>;
    async fn update(&self, id: ObjectId, client: Client) -> RepositoryResult<Client>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Client>>;
    /// Highest customClientId currently stored, if any. Input to the
    /// sequential ID generator; the unique index backs up the race.
    async fn latest_custom_client_id(&self) -> RepositoryResult<Option<String>>;
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Client>;
    async fn push_reminder(&self, id: ObjectId, reminder: Reminder) -> RepositoryResult<Client>;
}

pub struct MongoClientRepository {
    collection: mongodb::Collection<Client>,
}

impl MongoClientRepository {
    pub fn new(db: &Database) -> Self {
        MongoClientRepository { collection: db.collection::<Client>("clients") }
    }

    /// Unique (sparse) index on customClientId so concurrent generation of
    /// the same ID fails with a duplicate-key error instead of storing twins.
    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).sparse(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "customClientId": 1 })
            .options(options)
            .build();
        self.collection.create_index(model, None).await.map_err(RepositoryError::from)?;
        Ok(())
    }
}

#[async_trait]
impl ClientRepository for MongoClientRepository {
    #[tracing::instrument(skip(self, client))]
    async fn create(&self, client: Client) -> RepositoryResult<Client> {
        info!(custom_client_id = ?client.customClientId, "Creating new client");
        let mut new_client = client;
        new_client.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_client.createdAt = Some(now.clone());
        new_client.updatedAt = Some(now);

        match self.collection.insert_one(new_client.clone(), None).await {
            Ok(_) => {
                info!("Client created successfully");
                Ok(new_client)
            }
            Err(e) => {
                error!("Failed to create client: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Client> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(client)) => Ok(client),
            Ok(None) => Err(RepositoryError::not_found(format!("Client not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch client by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch client by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, client), fields(id = %id))]
    async fn update(&self, id: ObjectId, client: Client) -> RepositoryResult<Client> {
        info!("Updating client with ID: {}", id);
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&client)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize client: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Client updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => {
                error!("No client found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!("No client found to update for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to update client: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting client with ID: {}", id);
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => {
                info!("Client deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!("No client found to delete for ID: {}", id))),
            Err(e) => {
                error!("Failed to delete client: {}", e);
                Err(RepositoryError::database(format!("Failed to delete client: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Client>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list clients: {}", e)))?;
        let clients: Vec<Client> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize client: {}", e)))?;
        info!("Fetched {} clients", clients.len());
        Ok(clients)
    }

    #[tracing::instrument(skip(self))]
    async fn latest_custom_client_id(&self) -> RepositoryResult<Option<String>> {
        let filter = doc! { "customClientId": { "$ne": bson::Bson::Null } };
        let options = FindOneOptions::builder().sort(doc! { "customClientId": -1 }).build();
        let latest = self
            .collection
            .find_one(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch latest client id: {}", e)))?;
        Ok(latest.and_then(|client| client.customClientId))
    }

    #[tracing::instrument(skip(self, note), fields(id = %id))]
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Client> {
        let filter = doc! { "_id": id };
        let note_doc = bson::to_bson(&note)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize note: {}", e)))?;
        let update = doc! {
            "$push": { "Notes": note_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("Client not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to add note to client: {}", e);
                Err(RepositoryError::database(format!("Failed to add note to client: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, reminder), fields(id = %id))]
    async fn push_reminder(&self, id: ObjectId, reminder: Reminder) -> RepositoryResult<Client> {
        let filter = doc! { "_id": id };
        let reminder_doc = bson::to_bson(&reminder)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize reminder: {}", e)))?;
        let update = doc! {
            "$push": { "Reminders": reminder_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("Client not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to add reminder to client: {}", e);
                Err(RepositoryError::database(format!("Failed to add reminder to client: {}", e)))
            }
        }
    }
}
