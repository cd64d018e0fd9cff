use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub linkedClient: Option<ObjectId>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
