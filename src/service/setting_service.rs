use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::dto::misc_dto::UpdateSettingRequest;
use crate::model::setting::Setting;
use crate::repository::setting_repo::SettingRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait SettingService: Send + Sync {
    /// The singleton settings document; an empty one when never saved.
    async fn get_settings(&self) -> Result<Setting, ServiceError>;
    async fn update_settings(&self, request: UpdateSettingRequest) -> Result<Setting, ServiceError>;
}

pub struct SettingServiceImpl {
    pub setting_repo: Arc<dyn SettingRepository>,
}

impl SettingServiceImpl {
    pub fn new(setting_repo: Arc<dyn SettingRepository>) -> Self {
        SettingServiceImpl { setting_repo }
    }
}

#[async_trait]
impl SettingService for SettingServiceImpl {
    #[instrument(skip(self))]
    async fn get_settings(&self) -> Result<Setting, ServiceError> {
        let setting = self
            .setting_repo
            .get()
            .await
            .map_err(ServiceError::from)?
            .unwrap_or_else(Setting::empty);
        Ok(setting)
    }

    #[instrument(skip(self, request))]
    async fn update_settings(&self, request: UpdateSettingRequest) -> Result<Setting, ServiceError> {
        let mut setting = self
            .setting_repo
            .get()
            .await
            .map_err(ServiceError::from)?
            .unwrap_or_else(Setting::empty);

        if let Some(logo_light) = request.logo_light {
            setting.logoLight = logo_light;
        }
        if let Some(logo_dark) = request.logo_dark {
            setting.logoDark = logo_dark;
        }
        if let Some(quotation_logo) = request.quotation_logo {
            setting.quotationLogo = quotation_logo;
        }
        if let Some(agency_name) = request.agency_name {
            setting.agencyName = agency_name;
        }
        if let Some(tagline) = request.tagline {
            setting.tagline = tagline;
        }
        if let Some(emails) = request.emails {
            setting.emails = emails;
        }
        if let Some(phone_numbers) = request.phone_numbers {
            setting.phoneNumbers = phone_numbers;
        }
        if let Some(ceo_name) = request.ceo_name {
            setting.ceoName = ceo_name;
        }
        if let Some(ceo_title) = request.ceo_title {
            setting.ceoTitle = ceo_title;
        }
        if let Some(company_legal_name) = request.company_legal_name {
            setting.companyLegalName = company_legal_name;
        }
        if let Some(letterhead) = request.letterhead {
            setting.letterhead = letterhead;
        }
        if let Some(bank_accounts) = request.bank_accounts {
            setting.bankAccounts = bank_accounts;
        }

        self.setting_repo.upsert(setting).await.map_err(ServiceError::from)
    }
}
