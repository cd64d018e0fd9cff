use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::common::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Weekly,
    Custom,
}

impl Default for BillingCycle {
    fn default() -> Self {
        BillingCycle::Monthly
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
    Expired,
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        SubscriptionStatus::Active
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub client: ObjectId,
    pub title: String,
    pub firstBilling: String,
    #[serde(default)]
    pub nextBilling: Option<String>,
    #[serde(default)]
    pub cycle: BillingCycle,
    #[serde(default = "Subscription::default_repeat_every")]
    pub repeatEvery: u32,
    #[serde(default)]
    pub amount: f64,
    /// Tax percentages, non-negative, applied to the same base
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub secondTax: f64,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub Notes: Vec<Note>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl Subscription {
    fn default_repeat_every() -> u32 {
        1
    }
}
