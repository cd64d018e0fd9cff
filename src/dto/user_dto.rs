use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::{TeamSubRole, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub role: UserRole,

    pub team_sub_role: Option<TeamSubRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub role: Option<UserRole>,

    pub team_sub_role: Option<TeamSubRole>,

    pub is_blocked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 10))]
    pub refresh_token: String,
}
