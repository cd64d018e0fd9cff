use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::dto::client_dto::{AddClientNoteRequest, AddClientReminderRequest, CreateClientRequest, UpdateClientRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::client::{Client, ServiceLine};
use crate::model::common::{Note, Reminder};
use crate::repository::client_repo::ClientRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;
use crate::util::sequence::CLIENT_ID_FORMAT;

/// Attempts at generating a unique customClientId before giving up. Each
/// retry re-reads the latest stored ID, so a lost race converges quickly.
const ID_GENERATION_ATTEMPTS: u32 = 3;

#[async_trait]
pub trait ClientService: Send + Sync {
    async fn create_client(&self, request: CreateClientRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError>;
    async fn get_client(&self, id: ObjectId) -> Result<Client, ServiceError>;
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError>;
    async fn update_client(&self, id: ObjectId, request: UpdateClientRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError>;
    async fn delete_client(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError>;
    async fn add_note(&self, id: ObjectId, request: AddClientNoteRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError>;
    async fn add_reminder(&self, id: ObjectId, request: AddClientReminderRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError>;
}

pub struct ClientServiceImpl {
    pub client_repo: Arc<dyn ClientRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl ClientServiceImpl {
    pub fn new(client_repo: Arc<dyn ClientRepository>, activity_log: Arc<ActivityLog>) -> Self {
        ClientServiceImpl { client_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }

    fn service_lines_from_request(
        lines: &[crate::dto::client_dto::ServiceLineRequest],
    ) -> Result<Vec<ServiceLine>, ServiceError> {
        lines
            .iter()
            .map(|line| {
                Ok(ServiceLine {
                    service: Self::parse_ref(&line.service, "service")?,
                    quantity: line.quantity.unwrap_or(1),
                    unitPrice: line.unit_price,
                    discount: line.discount.unwrap_or(0.0),
                    paid: line.paid.unwrap_or(0.0),
                    pending: line.pending.unwrap_or(0.0),
                    startDate: Some(line.start_date.clone().unwrap_or_else(|| chrono::Utc::now().to_rfc3339())),
                    expiryDate: line.expiry_date.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl ClientService for ClientServiceImpl {
    #[instrument(skip(self, request), fields(client_type = ?request.client_type))]
    async fn create_client(&self, request: CreateClientRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError> {
        info!("Creating new client");

        let account_manager = request
            .account_manager
            .as_deref()
            .map(|value| Self::parse_ref(value, "accountManager"))
            .transpose()?;
        let services = match &request.services {
            Some(lines) => Self::service_lines_from_request(lines)?,
            None => Vec::new(),
        };
        let notes = request
            .notes
            .clone()
            .unwrap_or_default()
            .into_iter()
            .map(|message| Note {
                id: Some(ObjectId::new()),
                message,
                date: Some(chrono::Utc::now().to_rfc3339()),
                addedBy: actor,
            })
            .collect();

        let client = Client {
            id: None,
            clientType: request.client_type,
            companyName: request.company_name.clone(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            address: request.address.clone(),
            clientLevel: request.client_level.unwrap_or_default(),
            website: request.website.clone(),
            gstNumber: request.gst_number.clone(),
            accountManager: account_manager,
            status: request.status.unwrap_or_default(),
            createdBy: actor,
            services,
            files: Vec::new(),
            Notes: notes,
            Reminders: Vec::new(),
            followUps: Vec::new(),
            customClientId: None,
            createdAt: None,
            updatedAt: None,
        };

        // Read-then-increment races with concurrent creators; the unique
        // index rejects the loser and we retry with a fresh candidate.
        let mut attempt = 0;
        loop {
            attempt += 1;
            let latest = self.client_repo.latest_custom_client_id().await.map_err(ServiceError::from)?;
            let candidate = CLIENT_ID_FORMAT.next(latest.as_deref());
            let mut next_client = client.clone();
            next_client.customClientId = Some(candidate.clone());

            match self.client_repo.create(next_client).await {
                Ok(created) => {
                    if let Some(client_id) = created.id {
                        self.activity_log
                            .record(Activity::for_client(ActivityType::ClientCreated, "Client created", actor, client_id))
                            .await;
                    }
                    return Ok(created);
                }
                Err(ref e) if e.is_conflict() && attempt < ID_GENERATION_ATTEMPTS => {
                    warn!(candidate = %candidate, attempt, "Client ID already taken, retrying");
                    continue;
                }
                Err(e) => {
                    error!("Failed to create client: {e}");
                    return Err(ServiceError::from(e));
                }
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_client(&self, id: ObjectId) -> Result<Client, ServiceError> {
        self.client_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        self.client_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_client(&self, id: ObjectId, request: UpdateClientRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError> {
        info!("Updating client");
        let mut client = self.client_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(client_type) = request.client_type {
            client.clientType = client_type;
        }
        if let Some(company_name) = request.company_name {
            client.companyName = Some(company_name);
        }
        if let Some(name) = request.name {
            client.name = Some(name);
        }
        if let Some(email) = request.email {
            client.email = Some(email);
        }
        if let Some(phone) = request.phone {
            client.phone = Some(phone);
        }
        if let Some(address) = request.address {
            client.address = Some(address);
        }
        if let Some(client_level) = request.client_level {
            client.clientLevel = client_level;
        }
        if let Some(website) = request.website {
            client.website = Some(website);
        }
        if let Some(gst_number) = request.gst_number {
            client.gstNumber = Some(gst_number);
        }
        if let Some(account_manager) = request.account_manager.as_deref() {
            client.accountManager = Some(Self::parse_ref(account_manager, "accountManager")?);
        }
        if let Some(status) = request.status {
            client.status = status;
        }
        if let Some(lines) = &request.services {
            client.services = Self::service_lines_from_request(lines)?;
        }

        let updated = self.client_repo.update(id, client).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(ActivityType::ClientUpdated, "Client updated", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_client(&self, id: ObjectId, actor: Option<ObjectId>) -> Result<(), ServiceError> {
        info!("Deleting client");
        self.client_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(ActivityType::ClientDeleted, "Client deleted", actor, id))
            .await;
        Ok(())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_note(&self, id: ObjectId, request: AddClientNoteRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError> {
        let note = Note {
            id: Some(ObjectId::new()),
            message: request.message,
            date: Some(chrono::Utc::now().to_rfc3339()),
            addedBy: actor,
        };
        let updated = self.client_repo.push_note(id, note).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(ActivityType::NoteAdded, "Note added to client", actor, id))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn add_reminder(&self, id: ObjectId, request: AddClientReminderRequest, actor: Option<ObjectId>) -> Result<Client, ServiceError> {
        let reminder = Reminder {
            id: Some(ObjectId::new()),
            title: request.title,
            reminderDate: request.reminder_date,
            notes: request.notes,
            createdBy: actor,
            isCompleted: false,
        };
        let updated = self.client_repo.push_reminder(id, reminder).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(ActivityType::ReminderAdded, "Reminder added to client", actor, id))
            .await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::Activity;
    use crate::repository::activity_repo::ActivityRepository;
    use crate::repository::repository_error::{RepositoryError, RepositoryResult};
    use std::sync::Mutex;

    /// In-memory client store that mimics the unique index on customClientId.
    #[derive(Default)]
    struct InMemoryClientRepository {
        clients: Mutex<Vec<Client>>,
    }

    #[async_trait]
    impl ClientRepository for InMemoryClientRepository {
        async fn create(&self, client: Client) -> RepositoryResult<Client> {
            let mut clients = self.clients.lock().unwrap();
            if clients
                .iter()
                .any(|existing| existing.customClientId == client.customClientId)
            {
                return Err(RepositoryError::already_exists("E11000 duplicate key: customClientId"));
            }
            let mut created = client;
            created.id = Some(ObjectId::new());
            clients.push(created.clone());
            Ok(created)
        }

        async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Client> {
            self.clients
                .lock()
                .unwrap()
                .iter()
                .find(|client| client.id == Some(id))
                .cloned()
                .ok_or_else(|| RepositoryError::not_found("client"))
        }

        async fn update(&self, _id: ObjectId, client: Client) -> RepositoryResult<Client> {
            Ok(client)
        }

        async fn delete(&self, _id: ObjectId) -> RepositoryResult<()> {
            Ok(())
        }

        async fn list(&self) -> RepositoryResult<Vec<Client>> {
            Ok(self.clients.lock().unwrap().clone())
        }

        async fn latest_custom_client_id(&self) -> RepositoryResult<Option<String>> {
            Ok(self
                .clients
                .lock()
                .unwrap()
                .iter()
                .filter_map(|client| client.customClientId.clone())
                .max())
        }

        async fn push_note(&self, id: ObjectId, _note: Note) -> RepositoryResult<Client> {
            self.get_by_id(id).await
        }

        async fn push_reminder(&self, id: ObjectId, _reminder: Reminder) -> RepositoryResult<Client> {
            self.get_by_id(id).await
        }
    }

    struct FailingActivityRepository;

    #[async_trait]
    impl ActivityRepository for FailingActivityRepository {
        async fn append(&self, _activity: Activity) -> RepositoryResult<Activity> {
            Err(RepositoryError::database("activity store is down"))
        }
        async fn list(&self, _limit: i64) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_lead(&self, _lead: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_client(&self, _client: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_project(&self, _project: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
        async fn list_by_task(&self, _task: ObjectId) -> RepositoryResult<Vec<Activity>> {
            Ok(vec![])
        }
    }

    fn create_request() -> CreateClientRequest {
        CreateClientRequest {
            client_type: crate::model::client::ClientType::Organization,
            company_name: Some("Acme Ltd".to_string()),
            name: None,
            email: Some("billing@acme.test".to_string()),
            phone: Some("9999999999".to_string()),
            address: None,
            client_level: None,
            website: None,
            gst_number: None,
            account_manager: None,
            status: None,
            services: None,
            notes: None,
        }
    }

    fn service(repo: Arc<InMemoryClientRepository>) -> ClientServiceImpl {
        ClientServiceImpl::new(repo, Arc::new(ActivityLog::new(Arc::new(FailingActivityRepository))))
    }

    #[tokio::test]
    async fn clients_get_sequential_ids() {
        let repo = Arc::new(InMemoryClientRepository::default());
        let service = service(repo);

        let first = service.create_client(create_request(), None).await.unwrap();
        let second = service.create_client(create_request(), None).await.unwrap();
        assert_eq!(first.customClientId.as_deref(), Some("CUST-001"));
        assert_eq!(second.customClientId.as_deref(), Some("CUST-002"));
    }

    /// Delegating store whose first ID reads are stale, as happens when a
    /// concurrent creator wins the race between read and insert.
    struct RacyClientRepository {
        inner: InMemoryClientRepository,
        stale_reads: Mutex<u32>,
    }

    #[async_trait]
    impl ClientRepository for RacyClientRepository {
        async fn create(&self, client: Client) -> RepositoryResult<Client> {
            self.inner.create(client).await
        }
        async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Client> {
            self.inner.get_by_id(id).await
        }
        async fn update(&self, id: ObjectId, client: Client) -> RepositoryResult<Client> {
            self.inner.update(id, client).await
        }
        async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
            self.inner.delete(id).await
        }
        async fn list(&self) -> RepositoryResult<Vec<Client>> {
            self.inner.list().await
        }
        async fn latest_custom_client_id(&self) -> RepositoryResult<Option<String>> {
            {
                let mut stale = self.stale_reads.lock().unwrap();
                if *stale > 0 {
                    *stale -= 1;
                    return Ok(Some("CUST-001".to_string()));
                }
            }
            self.inner.latest_custom_client_id().await
        }
        async fn push_note(&self, id: ObjectId, note: Note) -> RepositoryResult<Client> {
            self.inner.push_note(id, note).await
        }
        async fn push_reminder(&self, id: ObjectId, reminder: Reminder) -> RepositoryResult<Client> {
            self.inner.push_reminder(id, reminder).await
        }
    }

    #[tokio::test]
    async fn lost_id_race_retries_with_a_fresh_candidate() {
        let inner = InMemoryClientRepository::default();
        // Another creator already took CUST-002
        let mut seeded = Client {
            id: None,
            clientType: crate::model::client::ClientType::Organization,
            companyName: Some("Rival Co".to_string()),
            name: None,
            email: None,
            phone: None,
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
            customClientId: Some("CUST-002".to_string()),
            createdAt: None,
            updatedAt: None,
        };
        seeded = inner.create(seeded).await.unwrap();
        assert!(seeded.id.is_some());

        let repo = Arc::new(RacyClientRepository { inner, stale_reads: Mutex::new(1) });
        let service = ClientServiceImpl::new(
            repo,
            Arc::new(ActivityLog::new(Arc::new(FailingActivityRepository))),
        );

        // First attempt reads the stale latest (CUST-001), derives CUST-002
        // and collides; the retry re-reads and lands on CUST-003.
        let created = service.create_client(create_request(), None).await.unwrap();
        assert_eq!(created.customClientId.as_deref(), Some("CUST-003"));
    }

    #[tokio::test]
    async fn creation_succeeds_even_when_activity_log_fails() {
        let repo = Arc::new(InMemoryClientRepository::default());
        let service = service(repo);
        // FailingActivityRepository rejects every append; the client write
        // must still be reported as successful.
        let created = service.create_client(create_request(), None).await.unwrap();
        assert!(created.id.is_some());
    }
}
