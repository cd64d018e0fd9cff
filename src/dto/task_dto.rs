use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::project::Priority;
use crate::model::task::TaskStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub status: Option<TaskStatus>,

    pub priority: Option<Priority>,

    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub status: Option<TaskStatus>,

    pub priority: Option<Priority>,

    pub due_date: Option<String>,
}
