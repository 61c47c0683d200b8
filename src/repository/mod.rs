//! Repository layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Single-row CRUD over the books table.
///
/// The store enforces no business rules: `update` and `delete` act on
/// whatever record carries `book.id` and do nothing if it is gone, so
/// callers check existence first. Storage faults come back as
/// [`crate::AppError::Database`], never as an empty result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Persist a new book and return it with its assigned id
    async fn create(&self, book: NewBook) -> AppResult<Book>;

    /// Overwrite every column of the record identified by `book.id`
    async fn update(&self, book: &Book) -> AppResult<()>;

    async fn delete(&self, book: &Book) -> AppResult<()>;
}
