use crate::model::setting::Setting;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::doc;
use mongodb::Database;
use tracing::info;

/// The settings collection holds a single document per deployment.
#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn get(&self) -> RepositoryResult<Option<Setting>>;
    async fn upsert(&self, setting: Setting) -> RepositoryResult<Setting>;
}

pub struct MongoSettingRepository {
    collection: mongodb::Collection<Setting>,
}

impl MongoSettingRepository {
    pub fn new(db: &Database) -> Self {
        MongoSettingRepository { collection: db.collection::<Setting>("settings") }
    }
}

#[async_trait]
impl SettingRepository for MongoSettingRepository {
    async fn get(&self) -> RepositoryResult<Option<Setting>> {
        self.collection
            .find_one(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch settings: {}", e)))
    }

    async fn upsert(&self, mut setting: Setting) -> RepositoryResult<Setting> {
        let now = chrono::Utc::now().to_rfc3339();
        setting.updatedAt = Some(now.clone());
        match self.get().await? {
            Some(existing) => {
                setting.id = existing.id;
                setting.createdAt = existing.createdAt.clone();
                let mut doc = bson::to_document(&setting)
                    .map_err(|e| RepositoryError::serialization(format!("Failed to serialize settings: {}", e)))?;
                doc.remove("_id");
                self.collection
                    .update_one(doc! { "_id": existing.id }, doc! { "$set": doc }, None)
                    .await
                    .map_err(RepositoryError::from)?;
                info!("Settings updated");
                Ok(setting)
            }
            None => {
                setting.id = Some(bson::oid::ObjectId::new());
                setting.createdAt = Some(now);
                self.collection
                    .insert_one(setting.clone(), None)
                    .await
                    .map_err(RepositoryError::from)?;
                info!("Settings created");
                Ok(setting)
            }
        }
    }
}
