//! Book service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::book::{BookInput, BookView, NewBook},
    repository::BookStore,
};

/// Existence checks and entity-to-view mapping on top of a [`BookStore`].
///
/// Not-found is an ordinary outcome here (`None` / `false`); only storage
/// faults are errors. Update and delete read before they write without any
/// isolation, so concurrent writers on the same id can lose updates.
#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List all books in store order
    pub async fn list(&self) -> AppResult<Vec<BookView>> {
        tracing::info!("Fetching all books");
        let books = self.store.list().await?;
        Ok(books.into_iter().map(BookView::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<BookView>> {
        tracing::info!(book_id = id, "Fetching book");
        let book = self.store.get(id).await?;
        if book.is_none() {
            tracing::warn!(book_id = id, "Book not found");
        }
        Ok(book.map(BookView::from))
    }

    /// Persist a validated request and return the stored book
    pub async fn create(&self, input: BookInput) -> AppResult<BookView> {
        tracing::info!("Creating a new book");
        let created = self.store.create(NewBook::from(input)).await?;
        tracing::info!(book_id = created.id, "Book created");
        Ok(created.into())
    }

    /// Full overwrite; `false` when no book has this id
    pub async fn update(&self, id: i32, input: BookInput) -> AppResult<bool> {
        tracing::info!(book_id = id, "Updating book");
        let Some(mut book) = self.store.get(id).await? else {
            tracing::warn!(book_id = id, "Cannot update, book not found");
            return Ok(false);
        };

        book.apply(input);
        self.store.update(&book).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(true)
    }

    /// `false` when no book has this id
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        tracing::info!(book_id = id, "Deleting book");
        let Some(book) = self.store.get(id).await? else {
            tracing::warn!(book_id = id, "Cannot delete, book not found");
            return Ok(false);
        };

        self.store.delete(&book).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(true)
    }
}
