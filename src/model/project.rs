use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::common::{FileMeta, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    Ongoing,
    Completed,
    Cancelled,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::NotStarted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Client,
    Internal,
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Client
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub client: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub startDate: Option<String>,
    #[serde(default)]
    pub endDate: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub updatedBy: Option<ObjectId>,
    #[serde(default)]
    pub assignedTo: Option<ObjectId>,
    #[serde(default)]
    pub projectType: ProjectType,
    #[serde(default)]
    pub files: Vec<FileMeta>,
    #[serde(default)]
    pub Notes: Vec<Note>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
