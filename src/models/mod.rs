//! Data models for the Book Management API

pub mod auth;
pub mod book;

pub use auth::{LoginRequest, LoginResponse, TokenClaims};
pub use book::{Book, BookInput, BookView, CreateBook, NewBook};
