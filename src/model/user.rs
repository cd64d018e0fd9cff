use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Sales,
    Support,
    Team,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Sales => "sales",
            UserRole::Support => "support",
            UserRole::Team => "team",
        }
    }
}

/// Sub-role for role = team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSubRole {
    Developer,
    GraphicDesigner,
    #[serde(rename = "SEO")]
    Seo,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Unique across users
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
    #[serde(default)]
    pub teamSubRole: Option<TeamSubRole>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub isBlocked: bool,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
