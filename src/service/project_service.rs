use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::project_dto::{AddProjectNoteRequest, CreateProjectRequest, UpdateProjectRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::common::Note;
use crate::model::project::Project;
use crate::repository::client_repo::ClientRepository;
use crate::repository::project_repo::ProjectRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn create_project(&self, request: CreateProjectRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError>;
    async fn get_project(&self, id: ObjectId) -> Result<Project, ServiceError>;
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError>;
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Project>, ServiceError>;
    async fn update_project(&self, id: ObjectId, request: UpdateProjectRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError>;
    async fn delete_project(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
    async fn add_note(&self, id: ObjectId, request: AddProjectNoteRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError>;
}

pub struct ProjectServiceImpl {
    pub project_repo: Arc<dyn ProjectRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl ProjectServiceImpl {
    pub fn new(
        project_repo: Arc<dyn ProjectRepository>,
        client_repo: Arc<dyn ClientRepository>,
        activity_log: Arc<ActivityLog>,
    ) -> Self {
        ProjectServiceImpl { project_repo, client_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }
}

#[async_trait]
impl ProjectService for ProjectServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_project(&self, request: CreateProjectRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError> {
        info!("Creating new project");
        let client = match request.client.as_deref() {
            Some(value) => {
                let client_id = Self::parse_ref(value, "client")?;
                self.client_repo
                    .get_by_id(client_id)
                    .await
                    .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;
                Some(client_id)
            }
            None => None,
        };
        let assigned_to = request
            .assigned_to
            .as_deref()
            .map(|value| Self::parse_ref(value, "assignedTo"))
            .transpose()?;

        let project = Project {
            id: None,
            client,
            title: request.title.clone(),
            price: request.price.unwrap_or(0.0),
            startDate: request.start_date.clone(),
            endDate: request.end_date.clone(),
            labels: request.labels.clone().unwrap_or_default(),
            status: request.status.unwrap_or_default(),
            priority: request.priority.unwrap_or_default(),
            createdBy: actor,
            updatedBy: None,
            assignedTo: assigned_to,
            projectType: request.project_type.unwrap_or_default(),
            files: Vec::new(),
            Notes: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };

        let created = self.project_repo.create(project).await.map_err(ServiceError::from)?;
        if let Some(project_id) = created.id {
            self.activity_log
                .record(Activity::for_project(ActivityType::ProjectCreated, "Project created", actor, project_id))
                .await;
        }
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_project(&self, id: ObjectId) -> Result<Project, ServiceError> {
        self.project_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        self.project_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(client = %client))]
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Project>, ServiceError> {
        self.project_repo.list_by_client(client).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_project(&self, id: ObjectId, request: UpdateProjectRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError> {
        let mut project = self.project_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(client) = request.client.as_deref() {
            let client_id = Self::parse_ref(client, "client")?;
            self.client_repo
                .get_by_id(client_id)
                .await
                .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;
            project.client = Some(client_id);
        }
        if let Some(title) = request.title {
            project.title = title;
        }
        if let Some(price) = request.price {
            project.price = price;
        }
        if let Some(start_date) = request.start_date {
            project.startDate = Some(start_date);
        }
        if let Some(end_date) = request.end_date {
            project.endDate = Some(end_date);
        }
        if let Some(labels) = request.labels {
            project.labels = labels;
        }
        if let Some(status) = request.status {
            project.status = status;
        }
        if let Some(priority) = request.priority {
            project.priority = priority;
        }
        if let Some(assigned_to) = request.assigned_to.as_deref() {
            project.assignedTo = Some(Self::parse_ref(assigned_to, "assignedTo")?);
        }
        if let Some(project_type) = request.project_type {
            project.projectType = project_type;
        }
        project.updatedBy = actor;

        let updated = self.project_repo.update(id, project).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_project(ActivityType::ProjectUpdated, "Project updated", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_project(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        self.project_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_project(ActivityType::ProjectDeleted, "Project deleted", actor, id))
            .await;
        Ok(())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_note(&self, id: ObjectId, request: AddProjectNoteRequest, actor: Option<ObjectId>) -> Result<Project, ServiceError> {
        let note = Note {
            id: Some(ObjectId::new()),
            message: request.message,
            date: Some(chrono::Utc::now().to_rfc3339()),
            addedBy: actor,
        };
        let updated = self.project_repo.push_note(id, note).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_project(ActivityType::ProjectNoteAdded, "Note added to project", actor, id))
            .await;
        Ok(updated)
    }
}
