use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Technical Issue")]
    TechnicalIssue,
    Billing,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    Other,
}

impl Default for TicketCategory {
    fn default() -> Self {
        TicketCategory::GeneralInquiry
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketComment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub comment: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    pub client: ObjectId,
    #[serde(default)]
    pub assignedTo: Option<ObjectId>,
    #[serde(default)]
    pub comments: Vec<TicketComment>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
