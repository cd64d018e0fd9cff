use crate::model::common::{CallLog, FollowUp, Note, Reminder};
use crate::model::lead::Lead;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Database, IndexModel};
use tracing::{error, info};

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create(&self, lead: Lead) -> RepositoryResult<Lead>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Lead>;
    async fn update(&self, id: ObjectId, lead: Lead) -> RepositoryResult<Lead>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self) -> RepositoryResult<Vec<Lead>>;
    async fn push_follow_up(&self, id: ObjectId, follow_up: FollowUp) -> RepositoryResult<Lead>;
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Lead>;
    async fn push_call(&self, id: ObjectId, call: CallLog) -> RepositoryResult<Lead>;
    async fn push_reminder(&self, id: ObjectId, reminder: Reminder) -> RepositoryResult<Lead>;
    async fn update_reminder(&self, id: ObjectId, reminder_id: ObjectId, reminder: Reminder) -> RepositoryResult<Lead>;
    async fn pull_reminder(&self, id: ObjectId, reminder_id: ObjectId) -> RepositoryResult<Lead>;
}

pub struct MongoLeadRepository {
    collection: mongodb::Collection<Lead>,
}

impl MongoLeadRepository {
    pub fn new(db: &Database) -> Self {
        MongoLeadRepository { collection: db.collection::<Lead>("leads") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder().keys(doc! { "phone": 1 }).options(options).build();
        self.collection.create_index(model, None).await.map_err(RepositoryError::from)?;
        Ok(())
    }

    /// `$push`/`$pull` one embedded array entry, then return the fresh lead.
    async fn apply_array_update(&self, id: ObjectId, update: bson::Document) -> RepositoryResult<Lead> {
        let filter = doc! { "_id": id };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("Lead not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to update lead array: {}", e);
                Err(RepositoryError::database(format!("Failed to update lead: {}", e)))
            }
        }
    }
}

#[async_trait]
impl LeadRepository for MongoLeadRepository {
    #[tracing::instrument(skip(self, lead), fields(name = %lead.name))]
    async fn create(&self, lead: Lead) -> RepositoryResult<Lead> {
        info!("Creating new lead");
        let mut new_lead = lead;
        new_lead.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_lead.createdAt = Some(now.clone());
        new_lead.updatedAt = Some(now);

        match self.collection.insert_one(new_lead.clone(), None).await {
            Ok(_) => {
                info!("Lead created successfully");
                Ok(new_lead)
            }
            Err(e) => {
                error!("Failed to create lead: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Lead> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(lead)) => Ok(lead),
            Ok(None) => Err(RepositoryError::not_found(format!("Lead not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch lead by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch lead by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self, lead), fields(id = %id))]
    async fn update(&self, id: ObjectId, lead: Lead) -> RepositoryResult<Lead> {
        info!("Updating lead with ID: {}", id);
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&lead)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize lead: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let update = doc! { "$set": doc };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("No lead found to update for ID: {}", id))),
            Err(e) => {
                error!("Failed to update lead: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting lead with ID: {}", id);
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!("No lead found to delete for ID: {}", id))),
            Err(e) => {
                error!("Failed to delete lead: {}", e);
                Err(RepositoryError::database(format!("Failed to delete lead: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Lead>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list leads: {}", e)))?;
        let leads: Vec<Lead> = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize lead: {}", e)))?;
        info!("Fetched {} leads", leads.len());
        Ok(leads)
    }

    #[tracing::instrument(skip(self, follow_up), fields(id = %id))]
    async fn push_follow_up(&self, id: ObjectId, follow_up: FollowUp) -> RepositoryResult<Lead> {
        let date = follow_up.date.clone().unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
        let follow_up_doc = bson::to_bson(&follow_up)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize follow-up: {}", e)))?;
        let update = doc! {
            "$push": { "followUps": follow_up_doc },
            "$set": { "latestFollowUp": date, "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        self.apply_array_update(id, update).await
    }

    #[tracing::instrument(skip(self, note), fields(id = %id))]
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Lead> {
        let note_doc = bson::to_bson(&note)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize note: {}", e)))?;
        let update = doc! {
            "$push": { "Notes": note_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        self.apply_array_update(id, update).await
    }

    #[tracing::instrument(skip(self, call), fields(id = %id))]
    async fn push_call(&self, id: ObjectId, call: CallLog) -> RepositoryResult<Lead> {
        let call_doc = bson::to_bson(&call)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize call: {}", e)))?;
        let update = doc! {
            "$push": { "Calls": call_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        self.apply_array_update(id, update).await
    }

    #[tracing::instrument(skip(self, reminder), fields(id = %id))]
    async fn push_reminder(&self, id: ObjectId, reminder: Reminder) -> RepositoryResult<Lead> {
        let reminder_doc = bson::to_bson(&reminder)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize reminder: {}", e)))?;
        let update = doc! {
            "$push": { "Reminders": reminder_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        self.apply_array_update(id, update).await
    }

    #[tracing::instrument(skip(self, reminder), fields(id = %id, reminder_id = %reminder_id))]
    async fn update_reminder(&self, id: ObjectId, reminder_id: ObjectId, reminder: Reminder) -> RepositoryResult<Lead> {
        let filter = doc! { "_id": id, "Reminders._id": reminder_id };
        let mut reminder_doc = bson::to_document(&reminder)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize reminder: {}", e)))?;
        reminder_doc.insert("_id", reminder_id);
        let update = doc! {
            "$set": { "Reminders.$": reminder_doc, "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        match self.collection.update_one(filter, update, None).await {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!("Reminder {} not found on lead {}", reminder_id, id))),
            Err(e) => {
                error!("Failed to update lead reminder: {}", e);
                Err(RepositoryError::database(format!("Failed to update lead reminder: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id, reminder_id = %reminder_id))]
    async fn pull_reminder(&self, id: ObjectId, reminder_id: ObjectId) -> RepositoryResult<Lead> {
        let update = doc! {
            "$pull": { "Reminders": { "_id": reminder_id } },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        self.apply_array_update(id, update).await
    }
}
