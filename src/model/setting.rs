use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default)]
    pub bankName: String,
    #[serde(default)]
    pub accountNumber: String,
    #[serde(default)]
    pub ifsc: String,
    #[serde(default)]
    pub upiId: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Letterhead {
    /// e.g. /uploads/letterhead-full.png
    #[serde(default)]
    pub fullPageImage: String,
}

/// Agency-wide settings. A single document per deployment; quotations copy
/// the fields they need at creation time instead of referencing this record.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub logoLight: String,
    #[serde(default)]
    pub logoDark: String,
    #[serde(default)]
    pub quotationLogo: String,
    #[serde(default)]
    pub agencyName: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phoneNumbers: Vec<String>,
    #[serde(default)]
    pub ceoName: String,
    #[serde(default)]
    pub ceoTitle: String,
    #[serde(default)]
    pub companyLegalName: String,
    #[serde(default)]
    pub letterhead: Letterhead,
    #[serde(default)]
    pub bankAccounts: Vec<BankAccount>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl Setting {
    pub fn empty() -> Self {
        Setting {
            id: None,
            logoLight: String::new(),
            logoDark: String::new(),
            quotationLogo: String::new(),
            agencyName: String::new(),
            tagline: String::new(),
            emails: Vec::new(),
            phoneNumbers: Vec::new(),
            ceoName: String::new(),
            ceoTitle: String::new(),
            companyLegalName: String::new(),
            letterhead: Letterhead::default(),
            bankAccounts: Vec::new(),
            createdAt: None,
            updatedAt: None,
        }
    }
}
