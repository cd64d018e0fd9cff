use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::lead_dto::{
    AddCallRequest, AddFollowUpRequest, AddLeadNoteRequest, AddReminderRequest, CreateLeadRequest,
    UpdateLeadRequest, UpdateReminderRequest,
};
use crate::model::activity::{Activity, ActivityType};
use crate::model::common::{CallLog, FollowUp, Note, Reminder};
use crate::model::lead::Lead;
use crate::repository::lead_repo::LeadRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;

#[async_trait]
pub trait LeadService: Send + Sync {
    async fn create_lead(&self, request: CreateLeadRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn get_lead(&self, id: ObjectId) -> Result<Lead, ServiceError>;
    async fn list_leads(&self) -> Result<Vec<Lead>, ServiceError>;
    async fn update_lead(&self, id: ObjectId, request: UpdateLeadRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn delete_lead(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
    async fn add_follow_up(&self, id: ObjectId, request: AddFollowUpRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn add_note(&self, id: ObjectId, request: AddLeadNoteRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn add_call(&self, id: ObjectId, request: AddCallRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn add_reminder(&self, id: ObjectId, request: AddReminderRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn update_reminder(&self, id: ObjectId, reminder_id: ObjectId, request: UpdateReminderRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
    async fn delete_reminder(&self, id: ObjectId, reminder_id: ObjectId, actor: Option<ObjectId>) -> Result<Lead, ServiceError>;
}

pub struct LeadServiceImpl {
    pub lead_repo: Arc<dyn LeadRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl LeadServiceImpl {
    pub fn new(lead_repo: Arc<dyn LeadRepository>, activity_log: Arc<ActivityLog>) -> Self {
        LeadServiceImpl { lead_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }
}

#[async_trait]
impl LeadService for LeadServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_lead(&self, request: CreateLeadRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        info!("Creating new lead");
        let assigned_to = request
            .assigned_to
            .as_deref()
            .map(|value| Self::parse_ref(value, "assignedTo"))
            .transpose()?;

        let lead = Lead {
            id: None,
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            address: request.address.clone(),
            company: request.company.clone(),
            source: request.source.clone(),
            status: request.status.unwrap_or_default(),
            assignedTo: assigned_to,
            createdBy: actor,
            labels: request.labels.clone().unwrap_or_default(),
            followUps: Vec::new(),
            Notes: Vec::new(),
            Calls: Vec::new(),
            Reminders: Vec::new(),
            files: Vec::new(),
            latestFollowUp: None,
            createdAt: None,
            updatedAt: None,
        };

        let created = self.lead_repo.create(lead).await.map_err(ServiceError::from)?;
        if let Some(lead_id) = created.id {
            self.activity_log
                .record(Activity::for_lead(ActivityType::Created, "Lead created", actor, lead_id))
                .await;
        }
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_lead(&self, id: ObjectId) -> Result<Lead, ServiceError> {
        self.lead_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_leads(&self) -> Result<Vec<Lead>, ServiceError> {
        self.lead_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_lead(&self, id: ObjectId, request: UpdateLeadRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let mut lead = self.lead_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(name) = request.name {
            lead.name = name;
        }
        if let Some(email) = request.email {
            lead.email = Some(email);
        }
        if let Some(phone) = request.phone {
            lead.phone = phone;
        }
        if let Some(address) = request.address {
            lead.address = Some(address);
        }
        if let Some(company) = request.company {
            lead.company = Some(company);
        }
        if let Some(source) = request.source {
            lead.source = Some(source);
        }
        if let Some(status) = request.status {
            lead.status = status;
        }
        if let Some(assigned_to) = request.assigned_to.as_deref() {
            lead.assignedTo = Some(Self::parse_ref(assigned_to, "assignedTo")?);
        }
        if let Some(labels) = request.labels {
            lead.labels = labels;
        }

        let updated = self.lead_repo.update(id, lead).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::Updated, "Lead updated", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_lead(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        self.lead_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::Deleted, "Lead deleted", actor, id))
            .await;
        Ok(())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_follow_up(&self, id: ObjectId, request: AddFollowUpRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let follow_up = FollowUp {
            id: Some(ObjectId::new()),
            message: request.message,
            date: Some(chrono::Utc::now().to_rfc3339()),
            addedBy: actor,
        };
        let updated = self.lead_repo.push_follow_up(id, follow_up).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::FollowupAdded, "Follow-up added to lead", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_note(&self, id: ObjectId, request: AddLeadNoteRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let note = Note {
            id: Some(ObjectId::new()),
            message: request.message,
            date: Some(chrono::Utc::now().to_rfc3339()),
            addedBy: actor,
        };
        let updated = self.lead_repo.push_note(id, note).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::NoteAdded, "Note added to lead", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_call(&self, id: ObjectId, request: AddCallRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let assignee = request
            .assignee
            .as_deref()
            .map(|value| Self::parse_ref(value, "assignee"))
            .transpose()?;
        let call = CallLog {
            id: Some(ObjectId::new()),
            subject: request.subject,
            callType: request.call_type.unwrap_or_default(),
            duration: request.duration,
            assignee,
            description: request.description,
            result: request.result,
            date: Some(chrono::Utc::now().to_rfc3339()),
        };
        let updated = self.lead_repo.push_call(id, call).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::CallAdded, "Call logged on lead", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_reminder(&self, id: ObjectId, request: AddReminderRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let reminder = Reminder {
            id: Some(ObjectId::new()),
            title: request.title,
            reminderDate: request.reminder_date,
            notes: request.notes,
            createdBy: actor,
            isCompleted: false,
        };
        let updated = self.lead_repo.push_reminder(id, reminder).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::ReminderAdded, "Reminder added to lead", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id, reminder_id = %reminder_id))]
    async fn update_reminder(&self, id: ObjectId, reminder_id: ObjectId, request: UpdateReminderRequest, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let reminder = Reminder {
            id: Some(reminder_id),
            title: request.title,
            reminderDate: request.reminder_date,
            notes: request.notes,
            createdBy: actor,
            isCompleted: request.is_completed.unwrap_or(false),
        };
        let updated = self
            .lead_repo
            .update_reminder(id, reminder_id, reminder)
            .await
            .map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::ReminderUpdated, "Reminder updated on lead", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id, reminder_id = %reminder_id))]
    async fn delete_reminder(&self, id: ObjectId, reminder_id: ObjectId, actor: Option<ObjectId>) -> Result<Lead, ServiceError> {
        let updated = self.lead_repo.pull_reminder(id, reminder_id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_lead(ActivityType::ReminderDeleted, "Reminder deleted from lead", actor, id))
            .await;
        Ok(updated)
    }
}
