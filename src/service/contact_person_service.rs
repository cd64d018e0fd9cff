use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::misc_dto::{CreateContactPersonRequest, UpdateContactPersonRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::contact_person::ContactPerson;
use crate::repository::contact_person_repo::ContactPersonRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContactPersonService: Send + Sync {
    async fn create(&self, request: CreateContactPersonRequest, actor: Option<ObjectId>) -> Result<ContactPerson, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<ContactPerson, ServiceError>;
    async fn list(&self) -> Result<Vec<ContactPerson>, ServiceError>;
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<ContactPerson>, ServiceError>;
    async fn update(&self, id: ObjectId, request: UpdateContactPersonRequest, actor: Option<ObjectId>) -> Result<ContactPerson, ServiceError>;
    async fn delete(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
}

pub struct ContactPersonServiceImpl {
    pub contact_repo: Arc<dyn ContactPersonRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl ContactPersonServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactPersonRepository>, activity_log: Arc<ActivityLog>) -> Self {
        ContactPersonServiceImpl { contact_repo, activity_log }
    }

    fn parse_client(value: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid client id: {}", value)))
    }

    async fn record_for_client(&self, client: Option<ObjectId>, activity_type: ActivityType, description: &str, actor: Option<ObjectId>) {
        if let Some(client_id) = client {
            self.activity_log
                .record(Activity::for_client(activity_type, description, actor, client_id))
                .await;
        }
    }
}

#[async_trait]
impl ContactPersonService for ContactPersonServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: CreateContactPersonRequest, actor: Option<ObjectId>) -> Result<ContactPerson, ServiceError> {
        let linked_client = request
            .linked_client
            .as_deref()
            .map(Self::parse_client)
            .transpose()?;
        let contact = ContactPerson {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            designation: request.designation,
            linkedClient: linked_client,
            createdBy: actor,
            createdAt: None,
            updatedAt: None,
        };
        let created = self.contact_repo.create(contact).await.map_err(ServiceError::from)?;
        self.record_for_client(created.linkedClient, ActivityType::ContactPersonCreated, "Contact person created", actor)
            .await;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: ObjectId) -> Result<ContactPerson, ServiceError> {
        self.contact_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<ContactPerson>, ServiceError> {
        self.contact_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(client = %client))]
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<ContactPerson>, ServiceError> {
        self.contact_repo.list_by_client(client).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update(&self, id: ObjectId, request: UpdateContactPersonRequest, actor: Option<ObjectId>) -> Result<ContactPerson, ServiceError> {
        let mut contact = self.contact_repo.get_by_id(id).await.map_err(ServiceError::from)?;
        if let Some(name) = request.name {
            contact.name = name;
        }
        if let Some(email) = request.email {
            contact.email = Some(email);
        }
        if let Some(phone) = request.phone {
            contact.phone = Some(phone);
        }
        if let Some(designation) = request.designation {
            contact.designation = Some(designation);
        }
        if let Some(linked_client) = request.linked_client.as_deref() {
            contact.linkedClient = Some(Self::parse_client(linked_client)?);
        }
        let updated = self.contact_repo.update(id, contact).await.map_err(ServiceError::from)?;
        self.record_for_client(updated.linkedClient, ActivityType::ContactPersonUpdated, "Contact person updated", actor)
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        let deleted = self.contact_repo.delete(id).await.map_err(ServiceError::from)?;
        self.record_for_client(deleted.linkedClient, ActivityType::ContactPersonDeleted, "Contact person deleted", actor)
            .await;
        Ok(())
    }
}
