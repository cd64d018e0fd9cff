use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::dto::quotation_dto::{
    CreateQuotationRequest, CreateQuotationTemplateRequest, UpdateQuotationRequest,
    UpdateQuotationStatusRequest, UpdateQuotationTemplateRequest,
};
use crate::model::activity::{Activity, ActivityType};
use crate::model::quotation::{
    validate_content_blocks, AgencySettingsSnapshot, Quotation, QuotationStatus, QuotationTemplate,
};
use crate::repository::quotation_repo::QuotationRepository;
use crate::repository::quotation_template_repo::QuotationTemplateRepository;
use crate::repository::setting_repo::SettingRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;
use crate::util::sequence::QUOTATION_ID_FORMAT;

const ID_GENERATION_ATTEMPTS: u32 = 3;

#[async_trait]
pub trait QuotationService: Send + Sync {
    async fn create_quotation(&self, request: CreateQuotationRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError>;
    async fn get_quotation(&self, id: ObjectId) -> Result<Quotation, ServiceError>;
    async fn list_quotations(&self) -> Result<Vec<Quotation>, ServiceError>;
    async fn update_quotation(&self, id: ObjectId, request: UpdateQuotationRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError>;
    async fn update_status(&self, id: ObjectId, request: UpdateQuotationStatusRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError>;
    async fn delete_quotation(&self, id: ObjectId) -> Result<(), ServiceError>;

    async fn create_template(&self, request: CreateQuotationTemplateRequest, actor: Option<ObjectId>) -> Result<QuotationTemplate, ServiceError>;
    async fn get_template(&self, id: ObjectId) -> Result<QuotationTemplate, ServiceError>;
    async fn list_templates(&self) -> Result<Vec<QuotationTemplate>, ServiceError>;
    async fn update_template(&self, id: ObjectId, request: UpdateQuotationTemplateRequest) -> Result<QuotationTemplate, ServiceError>;
    async fn delete_template(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct QuotationServiceImpl {
    pub quotation_repo: Arc<dyn QuotationRepository>,
    pub template_repo: Arc<dyn QuotationTemplateRepository>,
    pub setting_repo: Arc<dyn SettingRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl QuotationServiceImpl {
    pub fn new(
        quotation_repo: Arc<dyn QuotationRepository>,
        template_repo: Arc<dyn QuotationTemplateRepository>,
        setting_repo: Arc<dyn SettingRepository>,
        activity_log: Arc<ActivityLog>,
    ) -> Self {
        QuotationServiceImpl { quotation_repo, template_repo, setting_repo, activity_log }
    }
}

#[async_trait]
impl QuotationService for QuotationServiceImpl {
    #[instrument(skip(self, request), fields(client_name = %request.client_name))]
    async fn create_quotation(&self, request: CreateQuotationRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError> {
        info!("Creating new quotation");

        validate_content_blocks(&request.content_blocks)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let lead = request
            .lead
            .as_deref()
            .map(|value| {
                ObjectId::parse_str(value)
                    .map_err(|_| ServiceError::InvalidInput(format!("Invalid lead id: {}", value)))
            })
            .transpose()?;

        // Snapshot the live settings by value; an absent settings document
        // yields an empty snapshot, matching the original behavior.
        let agency_settings = match self.setting_repo.get().await.map_err(ServiceError::from)? {
            Some(setting) => AgencySettingsSnapshot::capture(&setting),
            None => AgencySettingsSnapshot::default(),
        };

        let quotation = Quotation {
            id: None,
            quotationId: String::new(), // assigned per attempt below
            quotationDate: request.quotation_date.clone(),
            clientName: request.client_name.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            address: request.address.clone(),
            company: request.company.clone(),
            website: request.website.clone(),
            subject: request.subject.clone(),
            inquiryDate: request.inquiry_date.clone(),
            contentBlocks: request.content_blocks.clone(),
            discount: request.discount.unwrap_or(0.0),
            finalCost: request.final_cost.unwrap_or(0.0),
            grandTotal: request.grand_total.unwrap_or(0.0),
            status: QuotationStatus::Draft,
            agencySettings: agency_settings,
            lead,
            createdBy: actor,
            updatedBy: None,
            createdAt: None,
            updatedAt: None,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let latest = self.quotation_repo.latest_quotation_id().await.map_err(ServiceError::from)?;
            let candidate = QUOTATION_ID_FORMAT.next(latest.as_deref());
            let mut next_quotation = quotation.clone();
            next_quotation.quotationId = candidate.clone();

            match self.quotation_repo.create(next_quotation).await {
                Ok(created) => {
                    if let Some(lead_id) = created.lead {
                        self.activity_log
                            .record(Activity::for_lead(
                                ActivityType::QuotationCreated,
                                format!("Quotation created: {}", created.quotationId),
                                actor,
                                lead_id,
                            ))
                            .await;
                    }
                    return Ok(created);
                }
                Err(ref e) if e.is_conflict() && attempt < ID_GENERATION_ATTEMPTS => {
                    warn!(candidate = %candidate, attempt, "Quotation ID already taken, retrying");
                    continue;
                }
                Err(e) => {
                    error!("Failed to create quotation: {e}");
                    return Err(ServiceError::from(e));
                }
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_quotation(&self, id: ObjectId) -> Result<Quotation, ServiceError> {
        self.quotation_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_quotations(&self) -> Result<Vec<Quotation>, ServiceError> {
        self.quotation_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_quotation(&self, id: ObjectId, request: UpdateQuotationRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError> {
        info!("Updating quotation");
        let mut quotation = self.quotation_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(blocks) = &request.content_blocks {
            validate_content_blocks(blocks).map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
            // Whole-sequence replace; the previous blocks are discarded
            quotation.contentBlocks = blocks.clone();
        }
        if let Some(quotation_date) = request.quotation_date {
            quotation.quotationDate = quotation_date;
        }
        if let Some(client_name) = request.client_name {
            quotation.clientName = client_name;
        }
        if let Some(phone) = request.phone {
            quotation.phone = phone;
        }
        if let Some(email) = request.email {
            quotation.email = email;
        }
        if let Some(address) = request.address {
            quotation.address = Some(address);
        }
        if let Some(company) = request.company {
            quotation.company = Some(company);
        }
        if let Some(website) = request.website {
            quotation.website = Some(website);
        }
        if let Some(subject) = request.subject {
            quotation.subject = subject;
        }
        if let Some(inquiry_date) = request.inquiry_date {
            quotation.inquiryDate = Some(inquiry_date);
        }
        if let Some(discount) = request.discount {
            quotation.discount = discount;
        }
        if let Some(final_cost) = request.final_cost {
            quotation.finalCost = final_cost;
        }
        if let Some(grand_total) = request.grand_total {
            quotation.grandTotal = grand_total;
        }
        if let Some(status) = request.status {
            quotation.status = status;
        }
        if let Some(lead) = request.lead.as_deref() {
            quotation.lead = Some(
                ObjectId::parse_str(lead)
                    .map_err(|_| ServiceError::InvalidInput(format!("Invalid lead id: {}", lead)))?,
            );
        }
        quotation.updatedBy = actor;

        let updated = self.quotation_repo.update(id, quotation).await.map_err(ServiceError::from)?;
        if let Some(lead_id) = updated.lead {
            self.activity_log
                .record(Activity::for_lead(
                    ActivityType::QuotationUpdated,
                    format!("Quotation updated: {}", updated.quotationId),
                    actor,
                    lead_id,
                ))
                .await;
        }
        Ok(updated)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_status(&self, id: ObjectId, request: UpdateQuotationStatusRequest, actor: Option<ObjectId>) -> Result<Quotation, ServiceError> {
        let updated = self
            .quotation_repo
            .update_status(id, request.status)
            .await
            .map_err(ServiceError::from)?;
        if let Some(lead_id) = updated.lead {
            self.activity_log
                .record(Activity::for_lead(
                    ActivityType::QuotationUpdated,
                    format!("Quotation updated: {}", updated.quotationId),
                    actor,
                    lead_id,
                ))
                .await;
        }
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_quotation(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.quotation_repo.delete(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_template(&self, request: CreateQuotationTemplateRequest, actor: Option<ObjectId>) -> Result<QuotationTemplate, ServiceError> {
        validate_content_blocks(&request.content_blocks)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let template = QuotationTemplate {
            id: None,
            name: request.name,
            description: request.description,
            contentBlocks: request.content_blocks,
            createdBy: actor,
            createdAt: None,
            updatedAt: None,
        };
        self.template_repo.create(template).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_template(&self, id: ObjectId) -> Result<QuotationTemplate, ServiceError> {
        self.template_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_templates(&self) -> Result<Vec<QuotationTemplate>, ServiceError> {
        self.template_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_template(&self, id: ObjectId, request: UpdateQuotationTemplateRequest) -> Result<QuotationTemplate, ServiceError> {
        let mut template = self.template_repo.get_by_id(id).await.map_err(ServiceError::from)?;
        if let Some(blocks) = &request.content_blocks {
            validate_content_blocks(blocks).map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
            template.contentBlocks = blocks.clone();
        }
        if let Some(name) = request.name {
            template.name = name;
        }
        if let Some(description) = request.description {
            template.description = Some(description);
        }
        self.template_repo.update(id, template).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_template(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.template_repo.delete(id).await.map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::Activity;
    use crate::model::quotation::{ContentBlock, ContentBlockBody, Paragraph};
    use crate::model::setting::Setting;
    use crate::repository::activity_repo::ActivityRepository;
    use crate::repository::repository_error::{RepositoryError, RepositoryResult};
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryQuotationRepository {
        quotations: Mutex<Vec<Quotation>>,
    }

    #[async_trait]
    impl QuotationRepository for InMemoryQuotationRepository {
        async fn create(&self, quotation: Quotation) -> RepositoryResult<Quotation> {
            let mut quotations = self.quotations.lock().unwrap();
            if quotations.iter().any(|existing| existing.quotationId == quotation.quotationId) {
                return Err(RepositoryError::already_exists("E11000 duplicate key: quotationId"));
            }
            let mut created = quotation;
            created.id = Some(ObjectId::new());
            quotations.push(created.clone());
            Ok(created)
        }

        async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quotation> {
            self.quotations
                .lock()
                .unwrap()
                .iter()
                .find(|quotation| quotation.id == Some(id))
                .cloned()
                .ok_or_else(|| RepositoryError::not_found("quotation"))
        }

        async fn update(&self, id: ObjectId, quotation: Quotation) -> RepositoryResult<Quotation> {
            let mut quotations = self.quotations.lock().unwrap();
            let slot = quotations
                .iter_mut()
                .find(|stored| stored.id == Some(id))
                .ok_or_else(|| RepositoryError::not_found("quotation"))?;
            let mut updated = quotation;
            updated.id = Some(id);
            updated.quotationId = slot.quotationId.clone();
            *slot = updated.clone();
            Ok(updated)
        }

        async fn update_status(&self, id: ObjectId, status: QuotationStatus) -> RepositoryResult<Quotation> {
            let mut quotations = self.quotations.lock().unwrap();
            let slot = quotations
                .iter_mut()
                .find(|stored| stored.id == Some(id))
                .ok_or_else(|| RepositoryError::not_found("quotation"))?;
            slot.status = status;
            Ok(slot.clone())
        }

        async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
            let mut quotations = self.quotations.lock().unwrap();
            let before = quotations.len();
            quotations.retain(|stored| stored.id != Some(id));
            if quotations.len() == before {
                return Err(RepositoryError::not_found("quotation"));
            }
            Ok(())
        }

        async fn list(&self) -> RepositoryResult<Vec<Quotation>> {
            Ok(self.quotations.lock().unwrap().clone())
        }

        async fn latest_quotation_id(&self) -> RepositoryResult<Option<String>> {
            Ok(self.quotations.lock().unwrap().last().map(|quotation| quotation.quotationId.clone()))
        }
    }

    struct EmptyTemplateRepository;

    #[async_trait]
    impl QuotationTemplateRepository for EmptyTemplateRepository {
        async fn create(&self, template: QuotationTemplate) -> RepositoryResult<QuotationTemplate> {
            Ok(template)
        }
        async fn get_by_id(&self, _id: ObjectId) -> RepositoryResult<QuotationTemplate> {
            Err(RepositoryError::not_found("template"))
        }
        async fn update(&self, _id: ObjectId, template: QuotationTemplate) -> RepositoryResult<QuotationTemplate> {
            Ok(template)
        }
        async fn delete(&self, _id: ObjectId) -> RepositoryResult<()> {
            Ok(())
        }
        async fn list(&self) -> RepositoryResult<Vec<QuotationTemplate>> {
            Ok(vec![])
        }
    }

    struct FixedSettingRepository;

    #[async_trait]
    impl SettingRepository for FixedSettingRepository {
        async fn get(&self) -> RepositoryResult<Option<Setting>> {
            let mut setting = Setting::empty();
            setting.agencyName = "Webitof".to_string();
            Ok(Some(setting))
        }
        async fn upsert(&self, setting: Setting) -> RepositoryResult<Setting> {
            Ok(setting)
        }
    }

    struct NullActivityRepository;

    #[async_trait]
    impl ActivityRepository for NullActivityRepository {
        async fn append(&self, activity: Activity) -> RepositoryResult<Activity> {
            Ok(activity)
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

    fn paragraph_block(id: &str, content: &str) -> ContentBlock {
        ContentBlock {
            id: id.to_string(),
            body: ContentBlockBody::Paragraph {
                paragraph: Paragraph { heading: String::new(), content: content.to_string() },
            },
        }
    }

    fn create_request(blocks: Vec<ContentBlock>) -> CreateQuotationRequest {
        CreateQuotationRequest {
            quotation_date: "2025-07-01".to_string(),
            client_name: "Acme Ltd".to_string(),
            phone: "9999999999".to_string(),
            email: "ceo@acme.test".to_string(),
            address: None,
            company: Some("Acme".to_string()),
            website: None,
            subject: "Website development".to_string(),
            inquiry_date: None,
            content_blocks: blocks,
            discount: None,
            final_cost: None,
            grand_total: None,
            lead: None,
        }
    }

    fn quotation_service(repo: Arc<InMemoryQuotationRepository>) -> QuotationServiceImpl {
        QuotationServiceImpl::new(
            repo,
            Arc::new(EmptyTemplateRepository),
            Arc::new(FixedSettingRepository),
            Arc::new(ActivityLog::new(Arc::new(NullActivityRepository))),
        )
    }

    #[tokio::test]
    async fn quotation_ids_are_sequential_and_settings_are_snapshotted() {
        let repo = Arc::new(InMemoryQuotationRepository::default());
        let service = quotation_service(repo);

        let first = service
            .create_quotation(create_request(vec![paragraph_block("b-1", "hello")]), None)
            .await
            .unwrap();
        let second = service
            .create_quotation(create_request(vec![paragraph_block("b-1", "hello")]), None)
            .await
            .unwrap();

        assert_eq!(first.quotationId, "Q_00001");
        assert_eq!(second.quotationId, "Q_00002");
        assert_eq!(first.agencySettings.agencyName, "Webitof");
    }

    #[tokio::test]
    async fn invalid_blocks_reject_the_whole_create() {
        let repo = Arc::new(InMemoryQuotationRepository::default());
        let service = quotation_service(repo.clone());

        let blocks = vec![paragraph_block("b-1", "ok"), paragraph_block("b-1", "dup id")];
        let result = service.create_quotation(create_request(blocks), None).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        assert!(repo.quotations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_whole_block_sequence() {
        let repo = Arc::new(InMemoryQuotationRepository::default());
        let service = quotation_service(repo);

        let created = service
            .create_quotation(
                create_request(vec![paragraph_block("b-1", "one"), paragraph_block("b-2", "two")]),
                None,
            )
            .await
            .unwrap();

        let update = UpdateQuotationRequest {
            quotation_date: None,
            client_name: None,
            phone: None,
            email: None,
            address: None,
            company: None,
            website: None,
            subject: None,
            inquiry_date: None,
            content_blocks: Some(vec![paragraph_block("b-3", "three")]),
            discount: None,
            final_cost: None,
            grand_total: None,
            status: None,
            lead: None,
        };
        let updated = service.update_quotation(created.id.unwrap(), update, None).await.unwrap();

        // Previous sequence fully discarded, not merged
        assert_eq!(updated.contentBlocks.len(), 1);
        assert_eq!(updated.contentBlocks[0].id, "b-3");
        // quotationId is immutable across updates
        assert_eq!(updated.quotationId, created.quotationId);
    }
}
