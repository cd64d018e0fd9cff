use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Calendar event owned by a user.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub userId: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meetingLink: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub allDay: bool,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
