use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::subscription::{BillingCycle, SubscriptionStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub first_billing: String,

    pub next_billing: Option<String>,

    pub cycle: Option<BillingCycle>,

    #[validate(range(min = 1))]
    pub repeat_every: Option<u32>,

    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tax: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub second_tax: Option<f64>,

    pub status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub first_billing: Option<String>,

    pub next_billing: Option<String>,

    pub cycle: Option<BillingCycle>,

    #[validate(range(min = 1))]
    pub repeat_every: Option<u32>,

    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tax: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub second_tax: Option<f64>,

    pub status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddSubscriptionNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}
