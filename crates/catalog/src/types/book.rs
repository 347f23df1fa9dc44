//! Book record types.
//!
//! This module defines the [`Book`] record held by storage, the [`NewBook`]
//! payload accepted on create, and [`BookChanges`] for partial updates.
//! Validation of the record invariants lives here so every backend applies
//! the same rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest publication year accepted for a book.
pub const MIN_YEAR: i32 = 1000;

/// Highest rating a book can carry.
pub const MAX_RATING: f64 = 5.0;

/// Returns the highest publication year accepted today (next calendar year).
pub fn max_year() -> i32 {
    Utc::now().year() + 1
}

/// Identifier of a book, assigned by storage and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        BookId(id)
    }
}

/// A book record as held by storage.
///
/// Records are immutable once handed out in a snapshot; updates produce a
/// new record with the same `id` and `created_at`.
///
/// # Examples
///
/// ```
/// use libris_catalog::types::{Book, BookId};
///
/// let book = Book::new(BookId::new(1), "The AI Revolution", "Dr. Alan Turing", "science")
///     .with_rating(4.8)
///     .with_year(2023);
///
/// assert_eq!(book.year, Some(2023));
/// assert!(book.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g. "science").
    pub category: String,
    /// Language the book is written in.
    #[serde(default)]
    pub language: String,
    /// ISBN, empty when unknown.
    #[serde(default)]
    pub isbn: String,
    /// Publication year.
    #[serde(default, alias = "publicationYear", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Average rating between 0 and 5.
    #[serde(default)]
    pub rating: f64,
    /// Page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// Tags attached to the book.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a book with the required fields and defaults for the rest.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            author: author.into(),
            description: String::new(),
            category: category.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            isbn: String::new(),
            year: None,
            rating: 0.0,
            pages: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the publication year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the ISBN.
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Sets the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the page count.
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides both timestamps.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Checks the record invariants.
    ///
    /// Title, author and category must be non-blank, the rating must lie in
    /// `[0, 5]`, the year in `[1000, currentYear + 1]` and pages must be
    /// positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("author", &self.author)?;
        require_text("category", &self.category)?;

        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                message: format!("must be between 0 and {}", MAX_RATING),
            });
        }

        if let Some(year) = self.year {
            let max = max_year();
            if !(MIN_YEAR..=max).contains(&year) {
                return Err(ValidationError::OutOfRange {
                    field: "year".to_string(),
                    message: format!("must be between {} and {}", MIN_YEAR, max),
                });
            }
        }

        if self.pages == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: "pages".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the normalized ISBN used for uniqueness checks, if any.
    pub fn isbn_key(&self) -> Option<String> {
        normalize_isbn(&self.isbn)
    }
}

/// Default language for new books.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Payload for creating a book.
///
/// Required fields are optional here so that a missing field surfaces as a
/// [`ValidationError::MissingRequiredField`] instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "publicationYear")]
    pub year: Option<i32>,
    pub pages: Option<u32>,
    pub language: Option<String>,
    pub isbn: Option<String>,
    pub rating: Option<f64>,
    pub tags: Option<Vec<String>>,
}

impl NewBook {
    /// Creates a payload with the three required fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// Builds a validated [`Book`] with the given id and timestamp.
    ///
    /// Text fields are trimmed. Missing optional fields fall back to their
    /// defaults: empty description and ISBN, the current year, English, a
    /// zero rating and no tags. A blank language counts as missing.
    pub fn into_book(self, id: BookId, now: DateTime<Utc>) -> Result<Book, ValidationError> {
        let title = required("title", self.title)?;
        let author = required("author", self.author)?;
        let category = required("category", self.category)?;

        let book = Book {
            id,
            title,
            author,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            category,
            language: language_or_default(self.language),
            isbn: self.isbn.map(|i| i.trim().to_string()).unwrap_or_default(),
            year: Some(self.year.unwrap_or_else(|| now.year())),
            rating: self.rating.unwrap_or(0.0),
            pages: self.pages,
            tags: self.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        book.validate()?;
        Ok(book)
    }
}

/// Partial update for a book. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "publicationYear")]
    pub year: Option<i32>,
    pub pages: Option<u32>,
    pub language: Option<String>,
    pub isbn: Option<String>,
    pub rating: Option<f64>,
    pub tags: Option<Vec<String>>,
}

impl BookChanges {
    /// Returns true when the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.year.is_none()
            && self.pages.is_none()
            && self.language.is_none()
            && self.isbn.is_none()
            && self.rating.is_none()
            && self.tags.is_none()
    }

    /// Applies the changes to `current`, producing a validated record.
    ///
    /// Text is normalised as on creation, so a blank language resets to
    /// English. `id` and `created_at` are carried over untouched;
    /// `updated_at` is set to `now`.
    pub fn apply(self, current: &Book, now: DateTime<Utc>) -> Result<Book, ValidationError> {
        let mut book = current.clone();

        if let Some(title) = self.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            book.author = author.trim().to_string();
        }
        if let Some(category) = self.category {
            book.category = category.trim().to_string();
        }
        if let Some(description) = self.description {
            book.description = description.trim().to_string();
        }
        if let Some(year) = self.year {
            book.year = Some(year);
        }
        if let Some(pages) = self.pages {
            book.pages = Some(pages);
        }
        if self.language.is_some() {
            book.language = language_or_default(self.language);
        }
        if let Some(isbn) = self.isbn {
            book.isbn = isbn.trim().to_string();
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(tags) = self.tags {
            book.tags = tags;
        }
        book.updated_at = now;

        book.validate()?;
        Ok(book)
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        }),
    }
}

fn language_or_default(language: Option<String>) -> String {
    language
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Normalizes an ISBN for comparison: hyphens and spaces removed, upper-cased.
/// Returns `None` for an empty ISBN.
pub fn normalize_isbn(isbn: &str) -> Option<String> {
    let key: String = isbn
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase();
    if key.is_empty() { None } else { Some(key) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_parse() {
        assert_eq!("42".parse::<BookId>().unwrap(), BookId::new(42));
        assert!("abc".parse::<BookId>().is_err());
        assert!("-1".parse::<BookId>().is_err());
    }

    #[test]
    fn test_new_book_defaults() {
        let now = Utc::now();
        let book = NewBook::new("  Digital Transformation ", "Sarah Johnson", "technology")
            .into_book(BookId::new(7), now)
            .unwrap();

        assert_eq!(book.title, "Digital Transformation");
        assert_eq!(book.language, "English");
        assert_eq!(book.year, Some(now.year()));
        assert_eq!(book.rating, 0.0);
        assert!(book.isbn.is_empty());
        assert_eq!(book.created_at, now);
        assert_eq!(book.updated_at, now);
    }

    #[test]
    fn test_new_book_missing_required() {
        let payload = NewBook {
            title: Some("Untitled".to_string()),
            author: Some("   ".to_string()),
            category: Some("science".to_string()),
            ..Default::default()
        };
        let err = payload.into_book(BookId::new(1), Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingRequiredField { ref field } if field == "author"
        ));
    }

    #[test]
    fn test_rating_out_of_range() {
        let payload = NewBook {
            rating: Some(5.5),
            ..NewBook::new("A", "B", "c")
        };
        let err = payload.into_book(BookId::new(1), Utc::now()).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "rating"));
    }

    #[test]
    fn test_year_out_of_range() {
        let book = Book::new(BookId::new(1), "A", "B", "c").with_year(999);
        assert!(book.validate().is_err());

        let book = Book::new(BookId::new(1), "A", "B", "c").with_year(max_year() + 1);
        assert!(book.validate().is_err());

        let book = Book::new(BookId::new(1), "A", "B", "c").with_year(max_year());
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_publication_year_alias() {
        let payload: NewBook = serde_json::from_value(serde_json::json!({
            "title": "The Quantum World",
            "author": "Prof. Richard Feynman",
            "category": "physics",
            "publicationYear": 2023
        }))
        .unwrap();
        assert_eq!(payload.year, Some(2023));
    }

    #[test]
    fn test_changes_keep_identity() {
        let created = Utc::now() - chrono::Duration::days(3);
        let book = Book::new(BookId::new(3), "Old", "Author", "history").with_created_at(created);
        let changes = BookChanges {
            title: Some("New".to_string()),
            rating: Some(4.1),
            ..Default::default()
        };

        let now = Utc::now();
        let updated = changes.apply(&book, now).unwrap();
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, now);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.rating, 4.1);
    }

    #[test]
    fn test_changes_revalidate() {
        let book = Book::new(BookId::new(3), "Old", "Author", "history");
        let changes = BookChanges {
            rating: Some(-1.0),
            ..Default::default()
        };
        assert!(changes.apply(&book, Utc::now()).is_err());
        assert!(BookChanges::default().is_empty());
    }

    #[test]
    fn test_changes_normalize_text() {
        let book = Book::new(BookId::new(3), "Old", "Author", "history").with_language("French");
        let changes = BookChanges {
            language: Some("   ".to_string()),
            description: Some("  A short history.\n".to_string()),
            ..Default::default()
        };
        let updated = changes.apply(&book, Utc::now()).unwrap();
        assert_eq!(updated.language, "English");
        assert_eq!(updated.description, "A short history.");

        let changes = BookChanges {
            language: Some(" Spanish ".to_string()),
            ..Default::default()
        };
        let updated = changes.apply(&book, Utc::now()).unwrap();
        assert_eq!(updated.language, "Spanish");
        assert_eq!(updated.description, "");
    }

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(normalize_isbn("978-1234567890"), Some("9781234567890".to_string()));
        assert_eq!(normalize_isbn(" 0-19 x "), Some("019X".to_string()));
        assert_eq!(normalize_isbn(""), None);
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book::new(BookId::new(1), "A", "B", "c").with_year(2020);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["year"], 2020);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("pages").is_none());
    }
}
