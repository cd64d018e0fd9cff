use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Office,
    Travel,
    Marketing,
    Software,
    Salary,
    Other,
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        ExpenseCategory::Other
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub client: Option<ObjectId>,
    #[serde(default)]
    pub project: Option<ObjectId>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub teamMember: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
