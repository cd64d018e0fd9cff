use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::task::Task;
use crate::repository::task_repo::TaskRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create_task(&self, request: CreateTaskRequest, actor: Option<ObjectId>) -> Result<Task, ServiceError>;
    async fn get_task(&self, id: ObjectId) -> Result<Task, ServiceError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError>;
    async fn list_by_project(&self, project: ObjectId) -> Result<Vec<Task>, ServiceError>;
    async fn update_task(&self, id: ObjectId, request: UpdateTaskRequest, actor: Option<ObjectId>) -> Result<Task, ServiceError>;
    async fn delete_task(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
}

pub struct TaskServiceImpl {
    pub task_repo: Arc<dyn TaskRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl TaskServiceImpl {
    pub fn new(task_repo: Arc<dyn TaskRepository>, activity_log: Arc<ActivityLog>) -> Self {
        TaskServiceImpl { task_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }
}

#[async_trait]
impl TaskService for TaskServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_task(&self, request: CreateTaskRequest, actor: Option<ObjectId>) -> Result<Task, ServiceError> {
        let client = request.client.as_deref().map(|v| Self::parse_ref(v, "client")).transpose()?;
        let project = request.project.as_deref().map(|v| Self::parse_ref(v, "project")).transpose()?;
        let assigned_to = request.assigned_to.as_deref().map(|v| Self::parse_ref(v, "assignedTo")).transpose()?;

        let task = Task {
            id: None,
            title: request.title.clone(),
            description: request.description.clone(),
            client,
            project,
            assignedTo: assigned_to,
            status: request.status.unwrap_or_default(),
            priority: request.priority.unwrap_or_default(),
            dueDate: request.due_date.clone(),
            createdBy: actor,
            createdAt: None,
            updatedAt: None,
        };

        let created = self.task_repo.create(task).await.map_err(ServiceError::from)?;
        if let Some(task_id) = created.id {
            self.activity_log
                .record(Activity::for_task(ActivityType::TaskCreated, "Task created", actor, task_id))
                .await;
        }
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_task(&self, id: ObjectId) -> Result<Task, ServiceError> {
        self.task_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        self.task_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(project = %project))]
    async fn list_by_project(&self, project: ObjectId) -> Result<Vec<Task>, ServiceError> {
        self.task_repo.list_by_project(project).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_task(&self, id: ObjectId, request: UpdateTaskRequest, actor: Option<ObjectId>) -> Result<Task, ServiceError> {
        let mut task = self.task_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(title) = request.title {
            task.title = title;
        }
        if let Some(description) = request.description {
            task.description = Some(description);
        }
        if let Some(client) = request.client.as_deref() {
            task.client = Some(Self::parse_ref(client, "client")?);
        }
        if let Some(project) = request.project.as_deref() {
            task.project = Some(Self::parse_ref(project, "project")?);
        }
        if let Some(assigned_to) = request.assigned_to.as_deref() {
            task.assignedTo = Some(Self::parse_ref(assigned_to, "assignedTo")?);
        }
        if let Some(status) = request.status {
            task.status = status;
        }
        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        if let Some(due_date) = request.due_date {
            task.dueDate = Some(due_date);
        }

        let updated = self.task_repo.update(id, task).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_task(ActivityType::TaskUpdated, "Task updated", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_task(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        self.task_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_task(ActivityType::TaskDeleted, "Task deleted", actor, id))
            .await;
        Ok(())
    }
}
