use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::invoice_dto::{CreateInvoiceRequest, InvoiceItemRequest, UpdateInvoiceRequest};
use crate::model::activity::{Activity, ActivityType};
use crate::model::client::Client;
use crate::model::invoice::{Invoice, InvoiceItem};
use crate::repository::client_repo::ClientRepository;
use crate::repository::invoice_repo::InvoiceRepository;
use crate::repository::project_repo::ProjectRepository;
use crate::repository::service_repo::ServiceRepository;
use crate::repository::user_repo::UserRepository;
use crate::service::activity_log::ActivityLog;
use crate::util::error::ServiceError;
use crate::util::totals::{calculate_invoice_totals, LineInput};

#[async_trait]
pub trait InvoiceService: Send + Sync {
    async fn create_invoice(&self, request: CreateInvoiceRequest, actor: ObjectId) -> Result<Invoice, ServiceError>;
    async fn get_invoice(&self, id: ObjectId) -> Result<Invoice, ServiceError>;
    async fn list_invoices(&self) -> Result<Vec<Invoice>, ServiceError>;
    async fn update_invoice(&self, id: ObjectId, request: UpdateInvoiceRequest, actor: ObjectId) -> Result<Invoice, ServiceError>;
    async fn delete_invoice(&self, id: ObjectId, actor: ObjectId) -> Result<(), ServiceError>;
}

pub struct InvoiceServiceImpl {
    pub invoice_repo: Arc<dyn InvoiceRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub activity_log: Arc<ActivityLog>,
}

impl InvoiceServiceImpl {
    pub fn new(
        invoice_repo: Arc<dyn InvoiceRepository>,
        client_repo: Arc<dyn ClientRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        user_repo: Arc<dyn UserRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        activity_log: Arc<ActivityLog>,
    ) -> Self {
        InvoiceServiceImpl { invoice_repo, client_repo, project_repo, user_repo, service_repo, activity_log }
    }

    fn parse_ref(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(value)
            .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", field, value)))
    }

    async fn check_project_exists(&self, project: ObjectId) -> Result<(), ServiceError> {
        self.project_repo
            .get_by_id(project)
            .await
            .map(|_| ())
            .map_err(|_| ServiceError::NotFound("Project not found".to_string()))
    }

    async fn check_user_exists(&self, user: ObjectId) -> Result<(), ServiceError> {
        match self.user_repo.find_by_id(&user).await.map_err(ServiceError::from)? {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound("Created By user not found".to_string())),
        }
    }

    /// Build stored items from explicit request items, deriving each item's
    /// persisted `total`.
    fn items_from_request(items: &[InvoiceItemRequest]) -> Result<Vec<InvoiceItem>, ServiceError> {
        let inputs: Vec<LineInput> = items
            .iter()
            .map(|item| LineInput {
                quantity: item.quantity,
                unit_price: item.unit_price,
                discount: item.discount.unwrap_or(0.0),
            })
            .collect();
        // Validates discounts/quantities up front; totals per item are stored
        let totals = calculate_invoice_totals(&inputs, 0.0, 0.0)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let mut invoice_items = Vec::with_capacity(items.len());
        for (item, total) in items.iter().zip(totals.item_totals) {
            let service = item
                .service
                .as_deref()
                .map(|value| Self::parse_ref(value, "service"))
                .transpose()?;
            invoice_items.push(InvoiceItem {
                service,
                description: item.description.clone(),
                quantity: item.quantity,
                unitPrice: item.unit_price,
                discount: item.discount.unwrap_or(0.0),
                total,
            });
        }
        Ok(invoice_items)
    }

    /// Derive items from the client's contracted service lines; descriptions
    /// come from the referenced catalog entry when it still resolves.
    async fn items_from_client_services(&self, client: &Client) -> Result<Vec<InvoiceItem>, ServiceError> {
        let mut invoice_items = Vec::with_capacity(client.services.len());
        for line in &client.services {
            let description = match self.service_repo.get_by_id(line.service).await {
                Ok(service) => service.name,
                Err(_) => "Service".to_string(),
            };
            let input = LineInput { quantity: line.quantity, unit_price: line.unitPrice, discount: line.discount };
            let totals = calculate_invoice_totals(std::slice::from_ref(&input), 0.0, 0.0)
                .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
            invoice_items.push(InvoiceItem {
                service: Some(line.service),
                description,
                quantity: line.quantity,
                unitPrice: line.unitPrice,
                discount: line.discount,
                total: totals.item_totals[0],
            });
        }
        Ok(invoice_items)
    }

    /// Document-level derivation over already-built items. Totals are
    /// persisted together with the items that produced them.
    fn document_totals(items: &[InvoiceItem], tax: f64, second_tax: f64) -> Result<(f64, f64), ServiceError> {
        let inputs: Vec<LineInput> = items
            .iter()
            .map(|item| LineInput { quantity: item.quantity, unit_price: item.unitPrice, discount: item.discount })
            .collect();
        let totals = calculate_invoice_totals(&inputs, tax, second_tax)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        Ok((totals.subtotal, totals.total_amount))
    }
}

#[async_trait]
impl InvoiceService for InvoiceServiceImpl {
    #[instrument(skip(self, request), fields(invoice_number = %request.invoice_number))]
    async fn create_invoice(&self, request: CreateInvoiceRequest, actor: ObjectId) -> Result<Invoice, ServiceError> {
        info!("Creating new invoice");

        if self
            .invoice_repo
            .find_by_number(&request.invoice_number)
            .await
            .map_err(ServiceError::from)?
            .is_some()
        {
            return Err(ServiceError::Conflict("Invoice number already exists".to_string()));
        }

        let client_id = Self::parse_ref(&request.client, "client")?;
        let client = self
            .client_repo
            .get_by_id(client_id)
            .await
            .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;

        let project = match request.project.as_deref() {
            Some(value) => {
                let project_id = Self::parse_ref(value, "project")?;
                self.check_project_exists(project_id).await?;
                Some(project_id)
            }
            None => None,
        };

        self.check_user_exists(actor).await?;

        let items = match &request.items {
            Some(items) if !items.is_empty() => Self::items_from_request(items)?,
            _ => self.items_from_client_services(&client).await?,
        };

        let tax = request.tax.unwrap_or(0.0);
        let second_tax = request.second_tax.unwrap_or(0.0);
        let (subtotal, total_amount) = Self::document_totals(&items, tax, second_tax)?;

        let invoice = Invoice {
            id: None,
            invoiceNumber: request.invoice_number.clone(),
            client: client_id,
            project,
            issueDate: request.issue_date.clone(),
            dueDate: request.due_date.clone(),
            items,
            subtotal,
            tax,
            secondTax: second_tax,
            totalAmount: total_amount,
            notes: request.notes.clone(),
            status: request.status.unwrap_or_default(),
            createdBy: actor,
            createdAt: None,
            updatedAt: None,
        };

        let created = self.invoice_repo.create(invoice).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::InvoiceCreated,
                format!("Invoice created: {}", created.invoiceNumber),
                Some(actor),
                client_id,
            ))
            .await;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_invoice(&self, id: ObjectId) -> Result<Invoice, ServiceError> {
        self.invoice_repo.get_by_id(id).await.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<Invoice>, ServiceError> {
        self.invoice_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_invoice(&self, id: ObjectId, request: UpdateInvoiceRequest, actor: ObjectId) -> Result<Invoice, ServiceError> {
        info!("Updating invoice");
        let mut invoice = self.invoice_repo.get_by_id(id).await.map_err(ServiceError::from)?;

        if let Some(invoice_number) = &request.invoice_number {
            if invoice_number != &invoice.invoiceNumber {
                if self
                    .invoice_repo
                    .find_by_number(invoice_number)
                    .await
                    .map_err(ServiceError::from)?
                    .is_some()
                {
                    return Err(ServiceError::Conflict("Invoice number already exists".to_string()));
                }
                invoice.invoiceNumber = invoice_number.clone();
            }
        }

        let mut client_changed_to: Option<Client> = None;
        if let Some(client) = request.client.as_deref() {
            let client_id = Self::parse_ref(client, "client")?;
            if client_id != invoice.client {
                let client_doc = self
                    .client_repo
                    .get_by_id(client_id)
                    .await
                    .map_err(|_| ServiceError::NotFound("Client not found".to_string()))?;
                invoice.client = client_id;
                client_changed_to = Some(client_doc);
            }
        }

        if let Some(project) = request.project.as_deref() {
            let project_id = Self::parse_ref(project, "project")?;
            self.check_project_exists(project_id).await?;
            invoice.project = Some(project_id);
        }
        if let Some(issue_date) = request.issue_date {
            invoice.issueDate = issue_date;
        }
        if let Some(due_date) = request.due_date {
            invoice.dueDate = due_date;
        }
        if let Some(notes) = request.notes {
            invoice.notes = Some(notes);
        }
        if let Some(status) = request.status {
            invoice.status = status;
        }
        if let Some(tax) = request.tax {
            invoice.tax = tax;
        }
        if let Some(second_tax) = request.second_tax {
            invoice.secondTax = second_tax;
        }

        // Items precedence: explicit items, else re-derive when the client
        // changed, else keep the stored ones. Totals are recomputed in every
        // case so stale amounts are never persisted.
        invoice.items = match &request.items {
            Some(items) if !items.is_empty() => Self::items_from_request(items)?,
            _ => match &client_changed_to {
                Some(client) => self.items_from_client_services(client).await?,
                None => invoice.items,
            },
        };
        let (subtotal, total_amount) = Self::document_totals(&invoice.items, invoice.tax, invoice.secondTax)?;
        invoice.subtotal = subtotal;
        invoice.totalAmount = total_amount;

        let updated = self.invoice_repo.update(id, invoice).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::InvoiceUpdated,
                format!("Invoice updated: {}", updated.invoiceNumber),
                Some(actor),
                updated.client,
            ))
            .await;
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_invoice(&self, id: ObjectId, actor: ObjectId) -> Result<(), ServiceError> {
        let deleted = self.invoice_repo.delete(id).await.map_err(ServiceError::from)?;
        self.activity_log
            .record(Activity::for_client(
                ActivityType::InvoiceDeleted,
                format!("Invoice deleted: {}", deleted.invoiceNumber),
                Some(actor),
                deleted.client,
            ))
            .await;
        Ok(())
    }
}
