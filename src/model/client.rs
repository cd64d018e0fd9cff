use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::common::{FileMeta, FollowUp, Note, Reminder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Organization,
    Individual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientLevel {
    Gold,
    Silver,
    Bronze,
    Basic,
}

impl Default for ClientLevel {
    fn default() -> Self {
        ClientLevel::Basic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Active,
    Inactive,
    OnHold,
}

impl Default for ClientStatus {
    fn default() -> Self {
        ClientStatus::Active
    }
}

/// One contracted service line. Invoice items can be derived from these;
/// the same `quantity * unitPrice - discount` derivation applies.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service: ObjectId,
    #[serde(default = "ServiceLine::default_quantity")]
    pub quantity: u32,
    pub unitPrice: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub paid: f64,
    #[serde(default)]
    pub pending: f64,
    #[serde(default)]
    pub startDate: Option<String>,
    #[serde(default)]
    pub expiryDate: Option<String>,
}

impl ServiceLine {
    fn default_quantity() -> u32 {
        1
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub clientType: ClientType,
    #[serde(default)]
    pub companyName: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub clientLevel: ClientLevel,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub gstNumber: Option<String>,
    #[serde(default)]
    pub accountManager: Option<ObjectId>,
    #[serde(default)]
    pub status: ClientStatus,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub files: Vec<FileMeta>,
    #[serde(default)]
    pub Notes: Vec<Note>,
    #[serde(default)]
    pub Reminders: Vec<Reminder>,
    #[serde(default)]
    pub followUps: Vec<FollowUp>,
    /// Sequential public identifier, e.g. CUST-001. Unique.
    #[serde(default)]
    pub customClientId: Option<String>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
