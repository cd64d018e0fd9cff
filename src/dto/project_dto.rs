use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::project::{Priority, ProjectStatus, ProjectType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    pub labels: Option<Vec<String>>,

    pub status: Option<ProjectStatus>,

    pub priority: Option<Priority>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub project_type: Option<ProjectType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    pub labels: Option<Vec<String>>,

    pub status: Option<ProjectStatus>,

    pub priority: Option<Priority>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub project_type: Option<ProjectType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProjectNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}
