use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::project::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<ObjectId>,
    #[serde(default)]
    pub project: Option<ObjectId>,
    #[serde(default)]
    pub assignedTo: Option<ObjectId>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub dueDate: Option<String>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
