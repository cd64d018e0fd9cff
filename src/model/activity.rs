use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Closed set of auditable action tags. Stored as snake_case strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Created,
    Updated,
    Deleted,
    NoteAdded,
    FileAdded,
    FileDeleted,
    FollowupAdded,
    CallAdded,
    ReminderAdded,
    ReminderUpdated,
    ReminderDeleted,
    QuotationCreated,
    QuotationUpdated,
    ClientCreated,
    ClientUpdated,
    ClientDeleted,
    ProjectCreated,
    ProjectUpdated,
    ProjectDeleted,
    ProjectNoteAdded,
    ContactPersonCreated,
    ContactPersonUpdated,
    ContactPersonDeleted,
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionDeleted,
    InvoiceCreated,
    InvoiceUpdated,
    InvoiceDeleted,
    ExpenseCreated,
    ExpenseUpdated,
    ExpenseDeleted,
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
}

/// One append-only audit entry. Never updated or deleted by normal flow; at
/// most one of the correlated entity references is set per entry.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub user: Option<ObjectId>,
    #[serde(default)]
    pub lead: Option<ObjectId>,
    #[serde(default)]
    pub client: Option<ObjectId>,
    #[serde(default)]
    pub project: Option<ObjectId>,
    #[serde(default)]
    pub task: Option<ObjectId>,
}

impl Activity {
    fn bare(activity_type: ActivityType, description: impl Into<String>, user: Option<ObjectId>) -> Self {
        Activity {
            id: None,
            activity_type,
            description: description.into(),
            date: None,
            user,
            lead: None,
            client: None,
            project: None,
            task: None,
        }
    }

    pub fn for_lead(activity_type: ActivityType, description: impl Into<String>, user: Option<ObjectId>, lead: ObjectId) -> Self {
        let mut activity = Self::bare(activity_type, description, user);
        activity.lead = Some(lead);
        activity
    }

    pub fn for_client(activity_type: ActivityType, description: impl Into<String>, user: Option<ObjectId>, client: ObjectId) -> Self {
        let mut activity = Self::bare(activity_type, description, user);
        activity.client = Some(client);
        activity
    }

    pub fn for_project(activity_type: ActivityType, description: impl Into<String>, user: Option<ObjectId>, project: ObjectId) -> Self {
        let mut activity = Self::bare(activity_type, description, user);
        activity.project = Some(project);
        activity
    }

    pub fn for_task(activity_type: ActivityType, description: impl Into<String>, user: Option<ObjectId>, task: ObjectId) -> Self {
        let mut activity = Self::bare(activity_type, description, user);
        activity.task = Some(task);
        activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_uses_snake_case_tags() {
        let tag = serde_json::to_value(ActivityType::QuotationCreated).unwrap();
        assert_eq!(tag, "quotation_created");
        let tag = serde_json::to_value(ActivityType::ContactPersonDeleted).unwrap();
        assert_eq!(tag, "contact_person_deleted");
    }

    #[test]
    fn constructors_set_exactly_one_correlated_entity() {
        let id = ObjectId::new();
        let activity = Activity::for_client(ActivityType::ClientCreated, "Client created", None, id);
        assert_eq!(activity.client, Some(id));
        assert!(activity.lead.is_none() && activity.project.is_none() && activity.task.is_none());
    }
}
