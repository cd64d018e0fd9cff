//! Quotation documents and their reorderable content blocks.
//!
//! A quotation's body is an ordered sequence of polymorphic blocks. On the
//! wire a block is `{id, blockType, <blockType>: {...}}` with the payload
//! stored under a field named after the tag; the tag set is closed. The
//! payload is modeled as an enum so a block whose payload does not match its
//! tag cannot be represented, and deserializing such a document fails.
//! Sequence order is the rendering order and is preserved verbatim; updates
//! replace the whole sequence, never individual blocks.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::setting::{BankAccount, Setting};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub heading: String,
    pub content: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRow {
    /// One cell value per column, in header order.
    #[serde(default)]
    pub values: Vec<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Column names, e.g. ["S.N.", "Particulars", "Total", "Notes"]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<SectionRow>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyWebitofFeature {
    #[serde(default)]
    pub feature: String,
    #[serde(default)]
    pub others: String,
    #[serde(default)]
    pub webitof: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyWebitof {
    #[serde(default = "WhyWebitof::default_heading")]
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub featuresTable: Vec<WhyWebitofFeature>,
}

impl WhyWebitof {
    fn default_heading() -> String {
        "WHY WEBITOF?".to_string()
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsAndConditions {
    #[serde(default = "TermsAndConditions::default_heading")]
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
}

impl TermsAndConditions {
    fn default_heading() -> String {
        "Terms And Conditions".to_string()
    }
}

/// One reorderable unit of a quotation body. `id` is client-generated and
/// stable across reorders; it is not a database key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    #[serde(flatten)]
    pub body: ContentBlockBody,
}

/// The tag/payload pair of a content block. Internally tagged on
/// `blockType`, with the payload under a field named after the tag, which
/// reproduces the stored document shape exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum ContentBlockBody {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: Paragraph },
    #[serde(rename = "section")]
    Section { section: Section },
    #[serde(rename = "whyWebitof")]
    WhyWebitof {
        #[serde(rename = "whyWebitof")]
        why_webitof: WhyWebitof,
    },
    #[serde(rename = "termsAndConditions")]
    TermsAndConditions {
        #[serde(rename = "termsAndConditions")]
        terms_and_conditions: TermsAndConditions,
    },
    #[serde(rename = "bankAccounts")]
    BankAccounts {
        #[serde(rename = "bankAccounts")]
        bank_accounts: Vec<BankAccount>,
    },
}

impl ContentBlockBody {
    pub fn block_type(&self) -> &'static str {
        match self {
            ContentBlockBody::Paragraph { .. } => "paragraph",
            ContentBlockBody::Section { .. } => "section",
            ContentBlockBody::WhyWebitof { .. } => "whyWebitof",
            ContentBlockBody::TermsAndConditions { .. } => "termsAndConditions",
            ContentBlockBody::BankAccounts { .. } => "bankAccounts",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContentBlockError {
    #[error("content block at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate content block id: {0}")]
    DuplicateId(String),
    #[error("paragraph block '{0}' has empty content")]
    EmptyParagraphContent(String),
    #[error("section block '{0}' has an empty title")]
    EmptySectionTitle(String),
    #[error("section block '{0}' has no headers")]
    EmptySectionHeaders(String),
    #[error("section block '{id}' row {row} has {got} values but {expected} headers")]
    RowWidthMismatch { id: String, row: usize, got: usize, expected: usize },
    #[error("bankAccounts block '{0}' has no accounts")]
    EmptyBankAccounts(String),
    #[error("bankAccounts block '{id}' account {index} is missing {field}")]
    IncompleteBankAccount { id: String, index: usize, field: &'static str },
}

/// Validate a whole `contentBlocks` sequence before it is written.
///
/// Any failing block rejects the entire write; partial acceptance of a
/// sequence is not permitted. Row widths must match the header count of
/// their section; mismatches are a hard error, not padded or truncated.
pub fn validate_content_blocks(blocks: &[ContentBlock]) -> Result<(), ContentBlockError> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (position, block) in blocks.iter().enumerate() {
        if block.id.trim().is_empty() {
            return Err(ContentBlockError::EmptyId(position));
        }
        if !seen_ids.insert(block.id.as_str()) {
            return Err(ContentBlockError::DuplicateId(block.id.clone()));
        }
        match &block.body {
            ContentBlockBody::Paragraph { paragraph } => {
                if paragraph.content.trim().is_empty() {
                    return Err(ContentBlockError::EmptyParagraphContent(block.id.clone()));
                }
            }
            ContentBlockBody::Section { section } => {
                if section.title.trim().is_empty() {
                    return Err(ContentBlockError::EmptySectionTitle(block.id.clone()));
                }
                if section.headers.is_empty() {
                    return Err(ContentBlockError::EmptySectionHeaders(block.id.clone()));
                }
                for (row_index, row) in section.rows.iter().enumerate() {
                    if row.values.len() != section.headers.len() {
                        return Err(ContentBlockError::RowWidthMismatch {
                            id: block.id.clone(),
                            row: row_index,
                            got: row.values.len(),
                            expected: section.headers.len(),
                        });
                    }
                }
            }
            ContentBlockBody::WhyWebitof { .. } | ContentBlockBody::TermsAndConditions { .. } => {}
            ContentBlockBody::BankAccounts { bank_accounts } => {
                if bank_accounts.is_empty() {
                    return Err(ContentBlockError::EmptyBankAccounts(block.id.clone()));
                }
                for (index, account) in bank_accounts.iter().enumerate() {
                    let missing = if account.bankName.trim().is_empty() {
                        Some("bankName")
                    } else if account.accountNumber.trim().is_empty() {
                        Some("accountNumber")
                    } else if account.ifsc.trim().is_empty() {
                        Some("ifsc")
                    } else {
                        None
                    };
                    if let Some(field) = missing {
                        return Err(ContentBlockError::IncompleteBankAccount {
                            id: block.id.clone(),
                            index,
                            field,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Revised,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Draft
    }
}

/// Point-in-time copy of the agency settings, stored by value inside each
/// quotation. Later edits to the live [`Setting`] document must not change
/// quotations that were already issued.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencySettingsSnapshot {
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
    pub logoLight: String,
    #[serde(default)]
    pub logoDark: String,
    #[serde(default)]
    pub quotationLogo: String,
    #[serde(default)]
    pub bankAccounts: Vec<BankAccount>,
}

impl AgencySettingsSnapshot {
    pub fn capture(setting: &Setting) -> Self {
        AgencySettingsSnapshot {
            agencyName: setting.agencyName.clone(),
            tagline: setting.tagline.clone(),
            emails: setting.emails.clone(),
            phoneNumbers: setting.phoneNumbers.clone(),
            ceoName: setting.ceoName.clone(),
            ceoTitle: setting.ceoTitle.clone(),
            companyLegalName: setting.companyLegalName.clone(),
            logoLight: setting.logoLight.clone(),
            logoDark: setting.logoDark.clone(),
            quotationLogo: setting.quotationLogo.clone(),
            bankAccounts: setting.bankAccounts.clone(),
        }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Sequential public identifier, e.g. Q_00001. Immutable after creation.
    pub quotationId: String,
    pub quotationDate: String,
    pub clientName: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub inquiryDate: Option<String>,
    #[serde(default)]
    pub contentBlocks: Vec<ContentBlock>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub finalCost: f64,
    #[serde(default)]
    pub grandTotal: f64,
    #[serde(default)]
    pub status: QuotationStatus,
    #[serde(default)]
    pub agencySettings: AgencySettingsSnapshot,
    #[serde(default)]
    pub lead: Option<ObjectId>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    #[serde(default)]
    pub updatedBy: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

/// A reusable starting point for new quotations; shares the block model and
/// its validation with [`Quotation`].
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationTemplate {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contentBlocks: Vec<ContentBlock>,
    #[serde(default)]
    pub createdBy: Option<ObjectId>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paragraph_block(id: &str) -> ContentBlock {
        ContentBlock {
            id: id.to_string(),
            body: ContentBlockBody::Paragraph {
                paragraph: Paragraph {
                    heading: "Introduction".to_string(),
                    content: "Thank you for your inquiry.".to_string(),
                },
            },
        }
    }

    fn section_block(id: &str) -> ContentBlock {
        ContentBlock {
            id: id.to_string(),
            body: ContentBlockBody::Section {
                section: Section {
                    title: "Pricing".to_string(),
                    headers: vec!["S.N.".to_string(), "Particulars".to_string(), "Total".to_string()],
                    rows: vec![SectionRow {
                        values: vec!["1".to_string(), "Website".to_string(), "45000".to_string()],
                    }],
                },
            },
        }
    }

    #[test]
    fn block_serializes_with_payload_under_tag_field() {
        let value = serde_json::to_value(paragraph_block("b-1")).unwrap();
        assert_eq!(value["id"], "b-1");
        assert_eq!(value["blockType"], "paragraph");
        assert_eq!(value["paragraph"]["heading"], "Introduction");
    }

    #[test]
    fn sequence_round_trips_in_order() {
        let blocks = vec![section_block("b-1"), paragraph_block("b-2")];
        let encoded = serde_json::to_string(&blocks).unwrap();
        let decoded: Vec<ContentBlock> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, blocks);
    }

    #[test]
    fn mismatched_tag_and_payload_is_rejected_at_parse_time() {
        let raw = json!({
            "id": "b-1",
            "blockType": "section",
            "paragraph": { "heading": "h", "content": "c" }
        });
        assert!(serde_json::from_value::<ContentBlock>(raw).is_err());
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let raw = json!({
            "id": "b-1",
            "blockType": "carousel",
            "carousel": {}
        });
        assert!(serde_json::from_value::<ContentBlock>(raw).is_err());
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let blocks = vec![paragraph_block("b-1"), section_block("b-1")];
        assert_eq!(
            validate_content_blocks(&blocks),
            Err(ContentBlockError::DuplicateId("b-1".to_string()))
        );
    }

    #[test]
    fn row_width_must_match_headers() {
        let mut block = section_block("b-1");
        if let ContentBlockBody::Section { section } = &mut block.body {
            section.rows.push(SectionRow { values: vec!["only-one".to_string()] });
        }
        assert_eq!(
            validate_content_blocks(&[block]),
            Err(ContentBlockError::RowWidthMismatch {
                id: "b-1".to_string(),
                row: 1,
                got: 1,
                expected: 3
            })
        );
    }

    #[test]
    fn empty_bank_accounts_fail_validation() {
        let block = ContentBlock {
            id: "b-1".to_string(),
            body: ContentBlockBody::BankAccounts { bank_accounts: vec![] },
        };
        assert_eq!(
            validate_content_blocks(&[block]),
            Err(ContentBlockError::EmptyBankAccounts("b-1".to_string()))
        );
    }

    #[test]
    fn snapshot_is_detached_from_settings() {
        let mut setting = Setting::empty();
        setting.agencyName = "Webitof".to_string();
        let snapshot = AgencySettingsSnapshot::capture(&setting);
        setting.agencyName = "Renamed Later".to_string();
        assert_eq!(snapshot.agencyName, "Webitof");
    }
}
