//! End-to-end repository workflow against a live MongoDB. Run with
//! `cargo test -- --ignored` once MONGO_URI/MONGO_DATABASE point at a
//! disposable database.

use webitof_crm_backend::config::MongoConfig;
use webitof_crm_backend::model::client::{Client, ClientType};
use webitof_crm_backend::repository::client_repo::{ClientRepository, MongoClientRepository};
use webitof_crm_backend::repository::mongo;
use webitof_crm_backend::repository::repository_error::RepositoryError;
use webitof_crm_backend::util::sequence::CLIENT_ID_FORMAT;

fn test_client(custom_id: &str) -> Client {
    Client {
        id: None,
        clientType: ClientType::Organization,
        companyName: Some("Workflow Test Co".to_string()),
        name: None,
        email: Some("workflow@test.local".to_string()),
        phone: Some("9998887776".to_string()),
        address: None,
        clientLevel: Default::default(),
        website: None,
        gstNumber: None,
        accountManager: None,
        status: Default::default(),
        createdBy: None,
        services: vec![],
        files: vec![],
        Notes: vec![],
        Reminders: vec![],
        followUps: vec![],
        customClientId: Some(custom_id.to_string()),
        createdAt: None,
        updatedAt: None,
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn client_id_generation_and_conflict_workflow() {
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env().unwrap_or_else(|_| MongoConfig::from_test_env());
    let db = mongo::connect(&config).await.expect("MongoDB connection");
    let repo = MongoClientRepository::new(&db);
    repo.ensure_indexes().await.expect("index creation");

    // Generate the next ID from whatever is stored and create a client
    let latest = repo.latest_custom_client_id().await.expect("latest id");
    let next_id = CLIENT_ID_FORMAT.next(latest.as_deref());
    let created = repo.create(test_client(&next_id)).await.expect("client creation");
    assert_eq!(created.customClientId.as_deref(), Some(next_id.as_str()));

    // A second insert with the same generated ID must surface as a
    // retryable conflict, not a generic failure
    let duplicate = repo.create(test_client(&next_id)).await;
    match duplicate {
        Err(RepositoryError::AlreadyExists(_)) => {}
        other => panic!("expected AlreadyExists, got {:?}", other.map(|c| c.customClientId)),
    }

    // Cleanup
    if let Some(id) = created.id {
        repo.delete(id).await.expect("cleanup");
    }
}
