use crate::model::common::Note;
use crate::model::project::Project;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: Project) -> RepositoryResult<Project>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Project>;
    async fn update(&self, id: ObjectId, project: Project) -> RepositoryResult<Project>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<Project>;
    async fn list(&self) -> RepositoryResult<Vec<Project>>;
    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Project>>;
    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Project>;
}

pub struct MongoProjectRepository {
    collection: mongodb::Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        MongoProjectRepository { collection: db.collection::<Project>("projects") }
    }

    async fn collect_sorted(&self, filter: Option<bson::Document>) -> RepositoryResult<Vec<Project>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list projects: {}", e)))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::serialization(format!("Failed to deserialize project: {}", e)))
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn create(&self, mut project: Project) -> RepositoryResult<Project> {
        project.id = Some(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        project.createdAt = Some(now.clone());
        project.updatedAt = Some(now);
        self.collection
            .insert_one(project.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(project)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Project> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch project: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("Project not found for ID: {}", id)))
    }

    async fn update(&self, id: ObjectId, project: Project) -> RepositoryResult<Project> {
        let mut doc = bson::to_document(&project)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize project: {}", e)))?;
        doc.remove("_id");
        doc.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": doc }, None)
            .await
            .map_err(RepositoryError::from)?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No project found to update for ID: {}", id)));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<Project> {
        let deleted = self.get_by_id(id).await?;
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete project: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No project found to delete for ID: {}", id)));
        }
        Ok(deleted)
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        self.collect_sorted(None).await
    }

    async fn list_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Project>> {
        self.collect_sorted(Some(doc! { "client": client })).await
    }

    async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Project> {
        let note_doc = bson::to_bson(&note)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize note: {}", e)))?;
        let update = doc! {
            "$push": { "Notes": note_doc },
            "$set": { "updatedAt": chrono::Utc::now().to_rfc3339() },
        };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to add note to project: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("Project not found for ID: {}", id)));
        }
        self.get_by_id(id).await
    }
}
