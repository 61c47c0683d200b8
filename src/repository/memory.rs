//! In-process book store

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Default)]
struct Inner {
    books: BTreeMap<i32, Book>,
    last_id: i32,
}

/// Book store kept in memory; ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn create(&self, book: NewBook) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let book = Book {
            id: inner.last_id,
            title: book.title,
            author: book.author,
            year: book.year,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(stored) = inner.books.get_mut(&book.id) {
            *stored = book.clone();
        }
        Ok(())
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        self.inner.write().await.books.remove(&book.id);
        Ok(())
    }
}
