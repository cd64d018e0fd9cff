use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::misc_dto::{AddTicketCommentRequest, CreateTicketRequest, UpdateTicketRequest};
use crate::model::ticket::{Ticket, TicketComment};
use crate::repository::client_repo::ClientRepository;
use crate::repository::ticket_repo::TicketRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait TicketService: Send + Sync {
    async fn create(&self, request: CreateTicketRequest, actor: Option<ObjectId>) -> Result<Ticket, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Ticket, ServiceError>;
    async fn list(&self) -> Result<Vec<Ticket>, ServiceError>;
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Ticket>, ServiceError>;
    async fn update(&self, id: ObjectId, request: UpdateTicketRequest) -> Result<Ticket, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn add_comment(&self, id: ObjectId, request: AddTicketCommentRequest, actor: ObjectId) -> Result<Ticket, ServiceError>;
}

pub struct TicketServiceImpl {
    pub ticket_repo: Arc<dyn TicketRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
}

impl TicketServiceImpl {
    pub fn new(ticket_repo: Arc<dyn TicketRepository>, client_repo: Arc<dyn ClientRepository>) -> Self {
        TicketServiceImpl { ticket_repo, client_repo }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    #[instrument(skip(self, request), fields(subject = %request.subject))]
    async fn create(&self, request: CreateTicketRequest, _actor: Option<ObjectId>) -> Result<Ticket, ServiceError> {
        let client_id = Self::parse_ref(&request.client, "client")?;
        self.client_repo
            .get_by_id(client_id)
            .await
            .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;
        let assigned_to = request
            .assigned_to
            .as_deref()
            .map(|v| Self::parse_ref(v, "assignedTo"))
            .transpose()?;

        let ticket = Ticket {
            id: None,
            subject: request.subject,
            description: request.description,
            category: request.category.unwrap_or_default(),
            priority: request.priority.unwrap_or_default(),
            status: Default::default(),
            client: client_id,
            assignedTo: assigned_to,
            comments: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };
        self.ticket_repo.create(ticket).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<Ticket, ServiceError> {
        self.ticket_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Ticket>, ServiceError> {
        self.ticket_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(client = %client))]
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Ticket>, ServiceError> {
        self.ticket_repo.list_by_client(client).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update(&self, id: ObjectId, request: UpdateTicketRequest) -> Result<Ticket, ServiceError> {
        let mut ticket = self.ticket_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(subject) = request.subject {
            ticket.subject = subject;
        }
        if let Some(description) = request.description {
            ticket.description = description;
        }
        if let Some(category) = request.category {
            ticket.category = category;
        }
        if let Some(priority) = request.priority {
            ticket.priority = priority;
        }
        if let Some(status) = request.status {
            ticket.status = status;
        }
        if let Some(assigned_to) = request.assigned_to.as_deref() {
            ticket.assignedTo = Some(Self::parse_ref(assigned_to, "assignedTo")?);
        }

        self.ticket_repo.update(id, ticket).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.ticket_repo.delete(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_comment(&self, id: ObjectId, request: AddTicketCommentRequest, actor: ObjectId) -> Result<Ticket, ServiceError> {
        let comment = TicketComment {
            id: Some(ObjectId::new()),
            user: actor,
            comment: request.comment,
            date: Some(chrono::Utc::now().to_rfc3339()),
        };
        self.ticket_repo.push_comment(id, comment).await.map_err(ServiceError::from)
    }
}
