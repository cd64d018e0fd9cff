use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::model::user::{User, UserRole};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// User shape returned to clients; the password hash never leaves the service.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: UserRole,
    pub isBlocked: bool,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            role: user.role,
            isBlocked: user.isBlocked,
            createdAt: user.createdAt,
            updatedAt: user.updatedAt,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserAuthResponse {
    pub user: UserView,
    pub tokens: AuthTokens,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserView, ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn refresh_token(&self, refresh_token: String) -> Result<AuthTokens, ServiceError>;
    async fn get_user(&self, id: ObjectId) -> Result<UserView, ServiceError>;
    async fn list_users(&self) -> Result<Vec<UserView>, ServiceError>;
    async fn update_user(&self, id: ObjectId, request: UpdateUserRequest) -> Result<UserView, ServiceError>;
    async fn delete_user(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        UserServiceImpl { user_repo, jwt_utils }
    }

    fn tokens_for(&self, user: &User) -> Result<AuthTokens, ServiceError> {
        let tokens = self
            .jwt_utils
            .generate_token_pair(
                &user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                &user.email,
                user.role.as_str(),
            )
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;
        Ok(AuthTokens {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
        })
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserView, ServiceError> {
        info!("Creating new user");
        if self
            .user_repo
            .find_by_email(&request.email)
            .await
            .map_err(ServiceError::from)?
            .is_some()
        {
            return Err(ServiceError::Conflict("A user with this email already exists".to_string()));
        }

        let hash = PasswordUtilsImpl::hash_password(&request.password)
            .map_err(|e| ServiceError::InvalidInput(format!("Password hash error: {}", e)))?;

        let user = User {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            password_hash: hash,
            role: request.role,
            teamSubRole: request.team_sub_role,
            image: None,
            isBlocked: false,
            createdAt: None,
            updatedAt: None,
        };
        let inserted = self.user_repo.insert(user).await.map_err(ServiceError::from)?;
        Ok(inserted.into())
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError> {
        info!("User login attempt");
        let user = self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if user.isBlocked {
            error!("Blocked user attempted login: {}", email);
            return Err(ServiceError::InvalidInput("Account is blocked".to_string()));
        }

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InvalidInput(format!("Password verify error: {}", e)))?;
        if !valid {
            error!("Invalid credentials for user: {}", email);
            return Err(ServiceError::InvalidInput("Invalid credentials".to_string()));
        }

        let tokens = self.tokens_for(&user)?;
        info!("User logged in successfully");
        Ok(UserAuthResponse { user: user.into(), tokens })
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_token(&self, refresh_token: String) -> Result<AuthTokens, ServiceError> {
        let claims = self
            .jwt_utils
            .validate_refresh_token(&refresh_token)
            .map_err(|e| ServiceError::InvalidInput(format!("Invalid refresh token: {}", e)))?;
        let tokens = self
            .jwt_utils
            .generate_token_pair(&claims.sub, &claims.email, &claims.role)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;
        Ok(AuthTokens {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_user(&self, id: ObjectId) -> Result<UserView, ServiceError> {
        let user = self
            .user_repo
            .find_by_id(&id)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserView>, ServiceError> {
        let users = self.user_repo.list().await.map_err(ServiceError::from)?;
        Ok(users.into_iter().map(UserView::from).collect())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_user(&self, id: ObjectId, request: UpdateUserRequest) -> Result<UserView, ServiceError> {
        let mut user = self
            .user_repo
            .find_by_id(&id)
            .await
            .map_err(ServiceError::from)?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(phone) = request.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = request.address {
            user.address = Some(address);
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(team_sub_role) = request.team_sub_role {
            user.teamSubRole = Some(team_sub_role);
        }
        if let Some(is_blocked) = request.is_blocked {
            user.isBlocked = is_blocked;
        }

        let updated = self.user_repo.update(id, user).await.map_err(ServiceError::from)?;
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_user(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.user_repo.delete(id).await.map_err(ServiceError::from)
    }
}
