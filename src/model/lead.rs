use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::common::{CallLog, FileMeta, FollowUp, Note, Reminder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Unique across leads
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub assignedTo: Option<ObjectId>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub followUps: Vec<FollowUp>,
    #[serde(default)]
    pub Notes: Vec<Note>,
    #[serde(default)]
    pub Calls: Vec<CallLog>,
    #[serde(default)]
    pub Reminders: Vec<Reminder>,
    #[serde(default)]
    pub files: Vec<FileMeta>,
    #[serde(default)]
    pub latestFollowUp: Option<String>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
