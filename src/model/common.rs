//! Embedded sub-documents shared by several entities.
//!
//! These are owned by their parent document: deleting the parent deletes
//! them, and they have no lifecycle of their own.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub message: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub addedBy: Option<ObjectId>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub message: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub addedBy: Option<ObjectId>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    /// When the reminder should trigger
    pub reminderDate: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub isCompleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Inbound,
    Outbound,
}

impl Default for CallType {
    fn default() -> Self {
        CallType::Outbound
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub subject: String,
    #[serde(default)]
    pub callType: CallType,
    /// Format h:m:s, e.g. 00:35:20
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub assignee: Option<ObjectId>,
    #[serde(default)]
    pub description: Option<String>,
    /// Call result (success, no answer, ...)
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Uploaded file metadata. The bytes live on external storage; only the
/// path/URL is kept with the owning entity.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub originalName: String,
    pub storedName: String,
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
    pub mimeType: String,
    pub size: u64,
    #[serde(default)]
    pub uploadedBy: Option<ObjectId>,
    #[serde(default)]
    pub uploadedAt: Option<String>,
}
