use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A sellable service from the agency catalog.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<ObjectId>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
