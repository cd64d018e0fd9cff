use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::misc_dto::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::expense::Expense;
use crate::repository::expense_repo::ExpenseRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ExpenseService: Send + Sync {
    async fn create(&self, request: CreateExpenseRequest, actor: Option<ObjectId>) -> Result<Expense, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Expense, ServiceError>;
    async fn list(&self) -> Result<Vec<Expense>, ServiceError>;
    async fn update(&self, id: ObjectId, request: UpdateExpenseRequest, actor: Option<ObjectId>) -> Result<Expense, ServiceError>;
    async fn delete(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
}

pub struct ExpenseServiceImpl {
    pub expense_repo: Arc<dyn ExpenseRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl ExpenseServiceImpl {
    pub fn new(expense_repo: Arc<dyn ExpenseRepository>, activity_log: Arc<ActivityLog>) -> Self {
        ExpenseServiceImpl { expense_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }

    async fn record_for_client(&self, client: Option<ObjectId>, activity_type: ActivityType, description: String, actor: Option<ObjectId>) {
        if let Some(client_id) = client {
            self.activity_log
                .record(Activity::for_client(activity_type, description, actor, client_id))
                .await;
        }
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create(&self, request: CreateExpenseRequest, actor: Option<ObjectId>) -> Result<Expense, ServiceError> {
        let client = request.client.as_deref().map(|v| Self::parse_ref(v, "client")).transpose()?;
        let project = request.project.as_deref().map(|v| Self::parse_ref(v, "project")).transpose()?;
        let team_member = request.team_member.as_deref().map(|v| Self::parse_ref(v, "teamMember")).transpose()?;

        let expense = Expense {
            id: None,
            title: request.title.clone(),
            amount: request.amount,
            category: request.category.unwrap_or_default(),
            description: request.description.clone(),
            date: request.date.clone(),
            client,
            project,
            createdBy: actor,
            teamMember: team_member,
            createdAt: None,
            updatedAt: None,
        };
        let created = self.expense_repo.create(expense).await.map_err(ServiceError::from)?;
        self.record_for_client(
            created.client,
            ActivityType::ExpenseCreated,
            format!("Expense created: {}", created.title),
            actor,
        )
        .await;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Expense, ServiceError> {
        self.expense_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Expense>, ServiceError> {
        self.expense_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update(&self, id: ObjectId, request: UpdateExpenseRequest, actor: Option<ObjectId>) -> Result<Expense, ServiceError> {
        let mut expense = self.expense_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(title) = request.title {
            expense.title = title;
        }
        if let Some(amount) = request.amount {
            expense.amount = amount;
        }
        if let Some(category) = request.category {
            expense.category = category;
        }
        if let Some(description) = request.description {
            expense.description = Some(description);
        }
        if let Some(date) = request.date {
            expense.date = date;
        }
        if let Some(client) = request.client.as_deref() {
            expense.client = Some(Self::parse_ref(client, "client")?);
        }
        if let Some(project) = request.project.as_deref() {
            expense.project = Some(Self::parse_ref(project, "project")?);
        }
        if let Some(team_member) = request.team_member.as_deref() {
            expense.teamMember = Some(Self::parse_ref(team_member, "teamMember")?);
        }

        let updated = self.expense_repo.update(id, expense).await.map_err(ServiceError::from)?;
        self.record_for_client(
            updated.client,
            ActivityType::ExpenseUpdated,
            format!("Expense updated: {}", updated.title),
            actor,
        )
        .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        let deleted = self.expense_repo.delete(id).await.map_err(ServiceError::from)?;
        self.record_for_client(
            deleted.client,
            ActivityType::ExpenseDeleted,
            format!("Expense deleted: {}", deleted.title),
            actor,
        )
        .await;
        Ok(())
    }
}
