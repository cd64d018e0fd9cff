use serde_json::json;
use webitof_crm_backend::model::quotation::{
    validate_content_blocks, ContentBlock, ContentBlockBody, ContentBlockError, Paragraph, Section,
    SectionRow, TermsAndConditions,
};
use webitof_crm_backend::model::setting::BankAccount;

fn sample_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock {
            id: "intro".to_string(),
            body: ContentBlockBody::Paragraph {
                paragraph: Paragraph {
                    heading: "Introduction".to_string(),
                    content: "Thank you for reaching out to us.".to_string(),
                },
            },
        },
        ContentBlock {
            id: "pricing".to_string(),
            body: ContentBlockBody::Section {
                section: Section {
                    title: "Pricing".to_string(),
                    headers: vec!["S.N.".to_string(), "Particulars".to_string(), "Total".to_string()],
                    rows: vec![
                        SectionRow {
                            values: vec!["1".to_string(), "Website".to_string(), "45000".to_string()],
                        },
                        SectionRow {
                            values: vec!["2".to_string(), "Hosting".to_string(), "6000".to_string()],
                        },
                    ],
                },
            },
        },
        ContentBlock {
            id: "terms".to_string(),
            body: ContentBlockBody::TermsAndConditions {
                terms_and_conditions: TermsAndConditions {
                    heading: "Terms And Conditions".to_string(),
                    points: vec!["50% advance".to_string(), "Delivery in 6 weeks".to_string()],
                },
            },
        },
        ContentBlock {
            id: "banks".to_string(),
            body: ContentBlockBody::BankAccounts {
                bank_accounts: vec![BankAccount {
                    bankName: "HDFC".to_string(),
                    accountNumber: "50100212345678".to_string(),
                    ifsc: "HDFC0000123".to_string(),
                    upiId: "agency@hdfcbank".to_string(),
                }],
            },
        },
    ]
}

#[test]
fn sequence_round_trips_preserving_order_and_payloads() {
    let blocks = sample_blocks();
    let encoded = serde_json::to_string(&blocks).expect("serialize");
    let decoded: Vec<ContentBlock> = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, blocks);

    let ids: Vec<&str> = decoded.iter().map(|block| block.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "pricing", "terms", "banks"]);
}

#[test]
fn wire_format_nests_payload_under_the_tag() {
    let value = serde_json::to_value(&sample_blocks()[0]).expect("serialize");
    assert_eq!(value["blockType"], "paragraph");
    assert!(value["paragraph"].is_object());
    assert!(value.get("section").is_none());
}

#[test]
fn section_tag_with_paragraph_payload_is_rejected() {
    let raw = json!({
        "id": "b-1",
        "blockType": "section",
        "paragraph": { "heading": "h", "content": "c" }
    });
    assert!(serde_json::from_value::<ContentBlock>(raw).is_err());
}

#[test]
fn validator_rejects_row_width_mismatch() {
    let mut blocks = sample_blocks();
    if let ContentBlockBody::Section { section } = &mut blocks[1].body {
        section.rows.push(SectionRow { values: vec!["too-short".to_string()] });
    }
    assert!(matches!(
        validate_content_blocks(&blocks),
        Err(ContentBlockError::RowWidthMismatch { row: 2, got: 1, expected: 3, .. })
    ));
}

#[test]
fn validator_rejects_duplicate_ids_anywhere_in_the_sequence() {
    let mut blocks = sample_blocks();
    blocks[3].id = "intro".to_string();
    assert_eq!(
        validate_content_blocks(&blocks),
        Err(ContentBlockError::DuplicateId("intro".to_string()))
    );
}

#[test]
fn valid_sequence_passes() {
    assert!(validate_content_blocks(&sample_blocks()).is_ok());
}
