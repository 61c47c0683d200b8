//! Business logic services

pub mod auth;
pub mod books;

use std::sync::Arc;

use crate::{config::AuthConfig, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
}

impl Services {
    /// Wire the services over a book store and the JWT settings
    pub fn new(store: Arc<dyn BookStore>, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(Arc::new(auth::JwtTokenIssuer::new(auth_config))),
            books: books::BooksService::new(store),
        }
    }
}
