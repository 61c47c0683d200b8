//! Authentication service

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::auth::TokenClaims,
};

/// The one account this API knows about
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

/// Issues and checks signed bearer tokens
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, username: &str) -> AppResult<String>;

    fn verify(&self, token: &str) -> AppResult<TokenClaims>;
}

/// HS256 JWT issuer configured from [`AuthConfig`]
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: AuthConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, username: &str) -> AppResult<String> {
        TokenClaims::new(
            username,
            &self.config.issuer,
            &self.config.audience,
            self.config.expiry_minutes,
        )
        .create_token(&self.config.jwt_secret)
        .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        TokenClaims::from_token(
            token,
            &self.config.jwt_secret,
            &self.config.issuer,
            &self.config.audience,
        )
        .map_err(|e| AppError::Authentication(e.to_string()))
    }
}

#[derive(Clone)]
pub struct AuthService {
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { tokens }
    }

    /// Check the credential pair and return a token for it
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            tracing::info!(username, "Login succeeded");
            return self.tokens.issue(username);
        }
        tracing::warn!(username, "Login rejected");
        Err(AppError::Authentication("Invalid username or password".to_string()))
    }

    /// Validate a bearer token
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        self.tokens.verify(token)
    }
}
