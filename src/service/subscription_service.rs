use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::subscription_dto::{AddSubscriptionNoteRequest, CreateSubscriptionRequest, UpdateSubscriptionRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::common::Note;
use crate::model::subscription::Subscription;
use crate::repository::client_repo::ClientRepository;
use crate::repository::subscription_repo::SubscriptionRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn create_subscription(&self, request: CreateSubscriptionRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError>;
    async fn get_subscription(&self, id: ObjectId) -> Result<Subscription, ServiceError>;
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ServiceError>;
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Subscription>, ServiceError>;
    async fn update_subscription(&self, id: ObjectId, request: UpdateSubscriptionRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError>;
    async fn delete_subscription(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
    async fn add_note(&self, id: ObjectId, request: AddSubscriptionNoteRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError>;
}

pub struct SubscriptionServiceImpl {
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl SubscriptionServiceImpl {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        client_repo: Arc<dyn ClientRepository>,
        activity_log: Arc<ActivityLog>,
    ) -> Self {
        SubscriptionServiceImpl { subscription_repo, client_repo, activity_log }
    }
}

#[async_trait]
impl SubscriptionService for SubscriptionServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_subscription(&self, request: CreateSubscriptionRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError> {
        let client_id = ObjectId::parse_str(&request.client)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid client id: {}", request.client)))?;
        self.client_repo
            .get_by_id(client_id)
            .await
            .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;

        let subscription = Subscription {
            id: None,
            client: client_id,
            title: request.title.clone(),
            firstBilling: request.first_billing.clone(),
            nextBilling: request.next_billing.clone(),
            cycle: request.cycle.unwrap_or_default(),
            repeatEvery: request.repeat_every.unwrap_or(1),
            amount: request.amount.unwrap_or(0.0),
            tax: request.tax.unwrap_or(0.0),
            secondTax: request.second_tax.unwrap_or(0.0),
            status: request.status.unwrap_or_default(),
            createdBy: actor,
            Notes: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };

        let created = self.subscription_repo.create(subscription).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::SubscriptionCreated,
                format!("Subscription created: {}", created.title),
                actor,
                client_id,
            ))
            .await;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_subscription(&self, id: ObjectId) -> Result<Subscription, ServiceError> {
        self.subscription_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ServiceError> {
        self.subscription_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(client = %client))]
    async fn list_by_client(&self, client: ObjectId) -> Result<Vec<Subscription>, ServiceError> {
        self.subscription_repo.list_by_client(client).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_subscription(&self, id: ObjectId, request: UpdateSubscriptionRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError> {
        let mut subscription = self.subscription_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(title) = request.title {
            subscription.title = title;
        }
        if let Some(first_billing) = request.first_billing {
            subscription.firstBilling = first_billing;
        }
        if let Some(next_billing) = request.next_billing {
            subscription.nextBilling = Some(next_billing);
        }
        if let Some(cycle) = request.cycle {
            subscription.cycle = cycle;
        }
        if let Some(repeat_every) = request.repeat_every {
            subscription.repeatEvery = repeat_every;
        }
        if let Some(amount) = request.amount {
            subscription.amount = amount;
        }
        if let Some(tax) = request.tax {
            subscription.tax = tax;
        }
        if let Some(second_tax) = request.second_tax {
            subscription.secondTax = second_tax;
        }
        if let Some(status) = request.status {
            subscription.status = status;
        }

        let updated = self.subscription_repo.update(id, subscription).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::SubscriptionUpdated,
                format!("Subscription updated: {}", updated.title),
                actor,
                updated.client,
            ))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_subscription(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        let deleted = self.subscription_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::SubscriptionDeleted,
                format!("Subscription deleted: {}", deleted.title),
                actor,
                deleted.client,
            ))
            .await;
        Ok(())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_note(&self, id: ObjectId, request: AddSubscriptionNoteRequest, actor: Option<ObjectId>) -> Result<Subscription, ServiceError> {
        let note = Note {
            id: Some(ObjectId::new()),
            message: request.message,
            date: Some(chrono::Utc::now().to_rfc3339()),
            addedBy: actor,
        };
        let updated = self.subscription_repo.push_note(id, note).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::NoteAdded,
                "Note added to subscription",
                actor,
                updated.client,
            ))
            .await;
        Ok(updated)
    }
}
