//! Book model, request shapes and acceptance rules

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Earliest accepted publication year (movable type printing)
pub const MIN_YEAR: i32 = 1450;
/// Latest accepted publication year, before the current-year rule applies
pub const MAX_YEAR: i32 = 2100;

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    /// Overwrite every mutable field from a validated request (PUT semantics).
    pub fn apply(&mut self, input: BookInput) {
        self.title = input.title;
        self.author = input.author;
        self.year = input.year;
    }
}

/// Book not yet persisted; the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        BookView {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

/// Create/update book request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[serde(default, alias = "Title")]
    #[validate(
        required(message = "Title is required."),
        length(min = 2, max = 100, message = "Title must be between 2 and 100 characters.")
    )]
    pub title: Option<String>,

    #[serde(default, alias = "Author")]
    #[validate(
        required(message = "Author is required."),
        length(min = 2, max = 100, message = "Author must be between 2 and 100 characters.")
    )]
    pub author: Option<String>,

    /// Publication year; a missing value counts as 0 and fails the range rule
    #[serde(default, alias = "Year")]
    #[validate(range(min = 1450, max = 2100, message = "Year must be between 1450 and 2100."))]
    pub year: i32,
}

impl CreateBook {
    /// Run every rule, collecting all failures.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(error) = validate_not_blank(self.title.as_deref(), "Title is required.") {
            errors.add("title", error);
        }
        if let Err(error) = validate_not_blank(self.author.as_deref(), "Author is required.") {
            errors.add("author", error);
        }
        if let Err(error) = validate_not_future_year(self.year) {
            errors.add("year", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A present value must hold something other than whitespace.
///
/// Absent values are left to the `required` rule so the message is not
/// reported twice.
pub fn validate_not_blank(
    value: Option<&str>,
    message: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if value.trim().is_empty() => {
            let mut error = ValidationError::new("required");
            error.message = Some(message.into());
            Err(error)
        }
        _ => Ok(()),
    }
}

/// Year must not be after the current UTC calendar year.
pub fn validate_not_future_year(year: i32) -> Result<(), ValidationError> {
    if year <= Utc::now().year() {
        return Ok(());
    }
    let mut error = ValidationError::new("current_or_past_year");
    error.message = Some("Year must not be in the future.".into());
    Err(error)
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl TryFrom<CreateBook> for BookInput {
    type Error = ValidationErrors;

    fn try_from(data: CreateBook) -> Result<Self, Self::Error> {
        data.validate_all()?;
        match (data.title, data.author) {
            (Some(title), Some(author)) => Ok(BookInput {
                title,
                author,
                year: data.year,
            }),
            // `required` has already rejected this
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add("title", ValidationError::new("required"));
                Err(errors)
            }
        }
    }
}

impl From<BookInput> for NewBook {
    fn from(input: BookInput) -> Self {
        NewBook {
            title: input.title,
            author: input.author,
            year: input.year,
        }
    }
}
