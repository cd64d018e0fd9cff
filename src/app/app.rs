use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, JwtConfig, MongoConfig};
use crate::dto::user_dto::CreateUserRequest;
use crate::middlewares::auth_middleware::AuthState;
use crate::model::user::UserRole;
use crate::repository::activity_repo::MongoActivityRepository;
use crate::repository::client_repo::MongoClientRepository;
use crate::repository::contact_person_repo::MongoContactPersonRepository;
use crate::repository::event_repo::MongoEventRepository;
use crate::repository::expense_repo::MongoExpenseRepository;
use crate::repository::invoice_repo::MongoInvoiceRepository;
use crate::repository::lead_repo::MongoLeadRepository;
use crate::repository::mongo;
use crate::repository::project_repo::MongoProjectRepository;
use crate::repository::quotation_repo::MongoQuotationRepository;
use crate::repository::quotation_template_repo::MongoQuotationTemplateRepository;
use crate::repository::service_repo::{MongoCategoryRepository, MongoServiceRepository};
use crate::repository::setting_repo::MongoSettingRepository;
use crate::repository::subscription_repo::MongoSubscriptionRepository;
use crate::repository::task_repo::MongoTaskRepository;
use crate::repository::ticket_repo::MongoTicketRepository;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::activity_router::activity_router;
use crate::router::catalog_router::catalog_router;
use crate::router::client_router::client_router;
use crate::router::contact_person_router::contact_person_router;
use crate::router::event_router::event_router;
use crate::router::expense_router::expense_router;
use crate::router::invoice_router::invoice_router;
use crate::router::lead_router::lead_router;
use crate::router::project_router::project_router;
use crate::router::quotation_router::quotation_router;
use crate::router::setting_router::setting_router;
use crate::router::subscription_router::subscription_router;
use crate::router::task_router::task_router;
use crate::router::ticket_router::ticket_router;
use crate::router::user_router::user_router;
use crate::service::activity_log::ActivityLog;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::client_service::ClientServiceImpl;
use crate::service::contact_person_service::ContactPersonServiceImpl;
use crate::service::event_service::EventServiceImpl;
use crate::service::expense_service::ExpenseServiceImpl;
use crate::service::invoice_service::InvoiceServiceImpl;
use crate::service::lead_service::LeadServiceImpl;
use crate::service::project_service::ProjectServiceImpl;
use crate::service::quotation_service::QuotationServiceImpl;
use crate::service::setting_service::SettingServiceImpl;
use crate::service::subscription_service::SubscriptionServiceImpl;
use crate::service::task_service::TaskServiceImpl;
use crate::service::ticket_service::TicketServiceImpl;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::jwt::JwtTokenUtilsImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");

        let db = mongo::connect(&mongo_config).await.expect("MongoDB connection error");

        // Repositories share the one database handle
        let activity_repo = Arc::new(MongoActivityRepository::new(&db));
        let client_repo = Arc::new(MongoClientRepository::new(&db));
        let contact_repo = Arc::new(MongoContactPersonRepository::new(&db));
        let event_repo = Arc::new(MongoEventRepository::new(&db));
        let expense_repo = Arc::new(MongoExpenseRepository::new(&db));
        let invoice_repo = Arc::new(MongoInvoiceRepository::new(&db));
        let lead_repo = Arc::new(MongoLeadRepository::new(&db));
        let project_repo = Arc::new(MongoProjectRepository::new(&db));
        let quotation_repo = Arc::new(MongoQuotationRepository::new(&db));
        let template_repo = Arc::new(MongoQuotationTemplateRepository::new(&db));
        let category_repo = Arc::new(MongoCategoryRepository::new(&db));
        let service_repo = Arc::new(MongoServiceRepository::new(&db));
        let setting_repo = Arc::new(MongoSettingRepository::new(&db));
        let subscription_repo = Arc::new(MongoSubscriptionRepository::new(&db));
        let task_repo = Arc::new(MongoTaskRepository::new(&db));
        let ticket_repo = Arc::new(MongoTicketRepository::new(&db));
        let user_repo = Arc::new(MongoUserRepository::new(&db));

        // Unique indexes back the generated identifiers and natural keys
        client_repo.ensure_indexes().await.expect("Client index error");
        quotation_repo.ensure_indexes().await.expect("Quotation index error");
        invoice_repo.ensure_indexes().await.expect("Invoice index error");
        lead_repo.ensure_indexes().await.expect("Lead index error");
        user_repo.ensure_indexes().await.expect("User index error");

        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let activity_log = Arc::new(ActivityLog::new(activity_repo));

        let user_service = Arc::new(UserServiceImpl::new(user_repo.clone(), jwt_utils.clone()));
        let lead_service = Arc::new(LeadServiceImpl::new(lead_repo, activity_log.clone()));
        let client_service = Arc::new(ClientServiceImpl::new(client_repo.clone(), activity_log.clone()));
        let contact_service = Arc::new(ContactPersonServiceImpl::new(contact_repo, activity_log.clone()));
        let project_service = Arc::new(ProjectServiceImpl::new(
            project_repo.clone(),
            client_repo.clone(),
            activity_log.clone(),
        ));
        let task_service = Arc::new(TaskServiceImpl::new(task_repo, activity_log.clone()));
        let invoice_service = Arc::new(InvoiceServiceImpl::new(
            invoice_repo,
            client_repo.clone(),
            project_repo,
            user_repo,
            service_repo.clone(),
            activity_log.clone(),
        ));
        let subscription_service = Arc::new(SubscriptionServiceImpl::new(
            subscription_repo,
            client_repo.clone(),
            activity_log.clone(),
        ));
        let quotation_service = Arc::new(QuotationServiceImpl::new(
            quotation_repo,
            template_repo,
            setting_repo.clone(),
            activity_log.clone(),
        ));
        let expense_service = Arc::new(ExpenseServiceImpl::new(expense_repo, activity_log.clone()));
        let ticket_service = Arc::new(TicketServiceImpl::new(ticket_repo, client_repo));
        let event_service = Arc::new(EventServiceImpl::new(event_repo));
        let catalog_service = Arc::new(CatalogServiceImpl::new(service_repo, category_repo));
        let setting_service = Arc::new(SettingServiceImpl::new(setting_repo));

        let auth_state = Arc::new(AuthState { jwt_utils });

        let router = Router::new()
            .merge(user_router(user_service.clone(), auth_state.clone()))
            .merge(lead_router(lead_service, auth_state.clone()))
            .merge(client_router(client_service, auth_state.clone()))
            .merge(contact_person_router(contact_service, auth_state.clone()))
            .merge(project_router(project_service, auth_state.clone()))
            .merge(task_router(task_service, auth_state.clone()))
            .merge(invoice_router(invoice_service, auth_state.clone()))
            .merge(subscription_router(subscription_service, auth_state.clone()))
            .merge(quotation_router(quotation_service, auth_state.clone()))
            .merge(expense_router(expense_service, auth_state.clone()))
            .merge(ticket_router(ticket_service, auth_state.clone()))
            .merge(event_router(event_service, auth_state.clone()))
            .merge(catalog_router(catalog_service, auth_state.clone()))
            .merge(setting_router(setting_service, auth_state.clone()))
            .merge(activity_router(activity_log, auth_state))
            .route("/health", get(|| async { "OK" }));

        let app = App { config, router, user_service };
        app.create_first_admin_user().await;
        app
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        match self.user_service.user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let request = CreateUserRequest {
            name: admin_conf.name.clone(),
            email: admin_conf.email.clone(),
            phone: None,
            address: None,
            password: admin_conf.password.clone(),
            role: UserRole::Admin,
            team_sub_role: None,
        };
        match self.user_service.create_user(request).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
