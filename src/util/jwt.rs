use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation, Algorithm};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;
use crate::config::JwtConfig;

/// JWT token claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// User role (admin, manager, sales, support, team)
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: String,
    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
    #[error("Missing JWT secret")]
    MissingSecret,
    #[error("Invalid token type: expected {expected}, got {actual}")]
    InvalidTokenType { expected: String, actual: String },
}

pub trait JwtTokenUtils {
    fn generate_access_token(&self, user_id: &str, email: &str, role: &str) -> Result<String, JwtError>;
    fn generate_refresh_token(&self, user_id: &str, email: &str, role: &str) -> Result<String, JwtError>;
    fn generate_token_pair(&self, user_id: &str, email: &str, role: &str) -> Result<TokenPair, JwtError>;
    fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError>;
    fn validate_refresh_token(&self, token: &str) -> Result<Claims, JwtError>;
    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError>;
}

#[derive(Debug, Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
}

impl JwtTokenUtilsImpl {
    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenUtilsImpl { jwt_config }
    }

    pub fn from_env() -> Result<Self, JwtError> {
        let jwt_config = JwtConfig::from_env().map_err(|_| JwtError::MissingSecret)?;
        jwt_config.validate().map_err(|_| JwtError::MissingSecret)?;
        Ok(JwtTokenUtilsImpl::new(jwt_config))
    }

    pub fn from_test_env() -> Result<Self, JwtError> {
        let jwt_config = JwtConfig::from_test_env();
        jwt_config.validate().map_err(|_| JwtError::MissingSecret)?;
        Ok(JwtTokenUtilsImpl::new(jwt_config))
    }

    fn generate_token(&self, user_id: &str, email: &str, role: &str, token_type: TokenType, expires_in_minutes: i64) -> Result<String, JwtError> {
        debug!(
            "Generating {} token for user: {} with role: {}",
            token_type.as_str(),
            user_id,
            role
        );

        let secret = self.jwt_config.jwt_secret.as_str();
        let now = Utc::now();
        let expiration = now + Duration::minutes(expires_in_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            token_type: token_type.as_str().to_string(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        match encode(&header, &claims, &encoding_key) {
            Ok(token) => Ok(token),
            Err(err) => {
                error!("Failed to encode JWT token: {}", err);
                Err(JwtError::EncodingFailed(err.to_string()))
            }
        }
    }

    pub fn validate_token(&self, token: &str, expected_token_type: Option<TokenType>) -> Result<Claims, JwtError> {
        debug!("Validating JWT token");

        let secret = self.jwt_config.jwt_secret.as_str();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::new(Algorithm::HS256);

        match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let claims = token_data.claims;

                let now = Utc::now().timestamp();
                if claims.exp < now {
                    warn!("Token has expired for user: {}", claims.sub);
                    return Err(JwtError::TokenExpired);
                }

                if let Some(expected_type) = expected_token_type {
                    if claims.token_type != expected_type.as_str() {
                        error!(
                            "Invalid token type: expected {}, got {}",
                            expected_type.as_str(),
                            claims.token_type
                        );
                        return Err(JwtError::InvalidTokenType {
                            expected: expected_type.as_str().to_string(),
                            actual: claims.token_type.clone(),
                        });
                    }
                }

                debug!("Token validation successful for user: {}", claims.sub);
                Ok(claims)
            }
            Err(err) => {
                error!("Failed to decode JWT token: {}", err);
                Err(JwtError::DecodingFailed(err.to_string()))
            }
        }
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {
    fn generate_access_token(&self, user_id: &str, email: &str, role: &str) -> Result<String, JwtError> {
        self.generate_token(user_id, email, role, TokenType::Access, self.jwt_config.access_token_expiration)
    }

    fn generate_refresh_token(&self, user_id: &str, email: &str, role: &str) -> Result<String, JwtError> {
        self.generate_token(user_id, email, role, TokenType::Refresh, self.jwt_config.refresh_token_expiration)
    }

    fn generate_token_pair(&self, user_id: &str, email: &str, role: &str) -> Result<TokenPair, JwtError> {
        let access_token = self.generate_access_token(user_id, email, role)?;
        let refresh_token = self.generate_refresh_token(user_id, email, role)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.jwt_config.access_token_expiration * 60, // convert minutes to seconds
            token_type: "Bearer".to_string(),
        })
    }

    fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_token(token, Some(TokenType::Access))
    }

    fn validate_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_token(token, Some(TokenType::Refresh))
    }

    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError> {
        if !auth_header.starts_with("Bearer ") {
            error!("Invalid authorization header format");
            return Err(JwtError::InvalidToken);
        }

        let token = auth_header.trim_start_matches("Bearer ").trim();

        if token.is_empty() {
            error!("Empty token in authorization header");
            return Err(JwtError::InvalidToken);
        }

        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trip() {
        let utils = JwtTokenUtilsImpl::from_test_env().expect("test jwt config");
        let token = utils
            .generate_access_token("64b5f0c2a7e8d9001b2c3d4e", "admin@test.local", "admin")
            .expect("token generation");
        let claims = utils.validate_access_token(&token).expect("token validation");
        assert_eq!(claims.sub, "64b5f0c2a7e8d9001b2c3d4e");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn refresh_token_is_rejected_as_access_token() {
        let utils = JwtTokenUtilsImpl::from_test_env().expect("test jwt config");
        let token = utils
            .generate_refresh_token("64b5f0c2a7e8d9001b2c3d4e", "admin@test.local", "admin")
            .expect("token generation");
        assert!(matches!(
            utils.validate_access_token(&token),
            Err(JwtError::InvalidTokenType { .. })
        ));
    }

    #[test]
    fn extract_token_requires_bearer_scheme() {
        let utils = JwtTokenUtilsImpl::from_test_env().expect("test jwt config");
        assert!(utils.extract_token_from_header("Basic abc").is_err());
        assert_eq!(utils.extract_token_from_header("Bearer abc").unwrap(), "abc");
    }
}
