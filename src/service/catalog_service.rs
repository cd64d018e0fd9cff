//! The service catalog: sellable services and their categories.

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::instrument;

use crate::dto::misc_dto::{CreateCategoryRequest, CreateServiceRequest, UpdateServiceRequest};
use crate::model::service::{Category, ServiceOffering};
use crate::repository::service_repo::{CategoryRepository, ServiceRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_service(&self, request: CreateServiceRequest, actor: Option<ObjectId>) -> Result<ServiceOffering, ServiceError>;
    async fn get_service(&self, id: ObjectId) -> Result<ServiceOffering, ServiceError>;
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, ServiceError>;
    async fn update_service(&self, id: ObjectId, request: UpdateServiceRequest) -> Result<ServiceOffering, ServiceError>;
    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError>;

    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, ServiceError>;
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;
    async fn delete_category(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct CatalogServiceImpl {
    pub service_repo: Arc<dyn ServiceRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
}

impl CatalogServiceImpl {
    pub fn new(service_repo: Arc<dyn ServiceRepository>, category_repo: Arc<dyn CategoryRepository>) -> Self {
        CatalogServiceImpl { service_repo, category_repo }
    }

    fn parse_category(value: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid category id: {}", value)))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_service(&self, request: CreateServiceRequest, actor: Option<ObjectId>) -> Result<ServiceOffering, ServiceError> {
        let category = request.category.as_deref().map(Self::parse_category).transpose()?;
        let service = ServiceOffering {
            id: None,
            name: request.name,
            image: request.image.unwrap_or_default(),
            description: request.description,
            price: request.price,
            category,
            createdBy: actor,
            createdAt: None,
            updatedAt: None,
        };
        self.service_repo.create(service).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_service(&self, id: ObjectId) -> Result<ServiceOffering, ServiceError> {
        self.service_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, ServiceError> {
        self.service_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_service(&self, id: ObjectId, request: UpdateServiceRequest) -> Result<ServiceOffering, ServiceError> {
        let mut service = self.service_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(name) = request.name {
            service.name = name;
        }
        if let Some(image) = request.image {
            service.image = image;
        }
        if let Some(description) = request.description {
            service.description = Some(description);
        }
        if let Some(price) = request.price {
            service.price = Some(price);
        }
        if let Some(category) = request.category.as_deref() {
            service.category = Some(Self::parse_category(category)?);
        }

        self.service_repo.update(id, service).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.service_repo.delete(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, ServiceError> {
        let category = Category { id: None, name: request.name, createdAt: None, updatedAt: None };
        self.category_repo.create(category).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        self.category_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_category(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.category_repo.delete(id).await.map_err(ServiceError::from)
    }
}
