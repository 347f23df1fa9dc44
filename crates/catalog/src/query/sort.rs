//! Sort keys and ordering for book records.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::types::Book;

/// A field books can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Author,
    Category,
    Language,
    Isbn,
    Description,
    Year,
    Rating,
    Pages,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// All sortable fields.
    pub const ALL: [SortField; 12] = [
        SortField::Id,
        SortField::Title,
        SortField::Author,
        SortField::Category,
        SortField::Language,
        SortField::Isbn,
        SortField::Description,
        SortField::Year,
        SortField::Rating,
        SortField::Pages,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Parses a wire field name. `publicationYear` is accepted for `year`.
    pub fn parse(name: &str) -> Result<Self, QueryError> {
        let field = match name.trim() {
            "id" => SortField::Id,
            "title" => SortField::Title,
            "author" => SortField::Author,
            "category" => SortField::Category,
            "language" => SortField::Language,
            "isbn" => SortField::Isbn,
            "description" => SortField::Description,
            "year" | "publicationYear" => SortField::Year,
            "rating" => SortField::Rating,
            "pages" => SortField::Pages,
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            other => {
                return Err(QueryError::invalid(
                    "sortBy",
                    format!("unknown sort field '{}'", other),
                ));
            }
        };
        Ok(field)
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Category => "category",
            SortField::Language => "language",
            SortField::Isbn => "isbn",
            SortField::Description => "description",
            SortField::Year => "year",
            SortField::Rating => "rating",
            SortField::Pages => "pages",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    fn key(&self, book: &Book) -> Option<SortKey> {
        match self {
            SortField::Id => Some(SortKey::UInt(book.id.value())),
            SortField::Title => text_key(&book.title),
            SortField::Author => text_key(&book.author),
            SortField::Category => text_key(&book.category),
            SortField::Language => text_key(&book.language),
            SortField::Isbn => text_key(&book.isbn),
            SortField::Description => text_key(&book.description),
            SortField::Year => book.year.map(|y| SortKey::Int(i64::from(y))),
            SortField::Rating => Some(SortKey::Float(book.rating)),
            SortField::Pages => book.pages.map(|p| SortKey::Int(i64::from(p))),
            SortField::CreatedAt => Some(SortKey::Int(book.created_at.timestamp_micros())),
            SortField::UpdatedAt => Some(SortKey::Int(book.updated_at.timestamp_micros())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a direction; anything other than `desc` (any case) is ascending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Comparable value extracted from a record.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    UInt(u64),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::UInt(a), SortKey::UInt(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // A field always yields the same variant.
            _ => Ordering::Equal,
        }
    }
}

// Empty text counts as a missing value.
fn text_key(value: &str) -> Option<SortKey> {
    if value.is_empty() {
        None
    } else {
        Some(SortKey::Text(value.to_lowercase()))
    }
}

/// Ascending comparison with missing values placed after present ones.
fn compare_ascending(a: &Option<SortKey>, b: &Option<SortKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts `books` in place, stably, by `field` in `order`.
///
/// Text compares case-insensitively. A record lacking the field sorts last
/// ascending and first descending; descending is the exact reverse of the
/// ascending comparator, so equal keys keep their input order either way.
pub fn sort_books(books: &mut [&Book], field: SortField, order: SortOrder) {
    let mut keyed: Vec<(Option<SortKey>, &Book)> =
        books.iter().map(|b| (field.key(b), *b)).collect();

    match order {
        SortOrder::Asc => keyed.sort_by(|(a, _), (b, _)| compare_ascending(a, b)),
        SortOrder::Desc => keyed.sort_by(|(a, _), (b, _)| compare_ascending(b, a)),
    }

    for (slot, (_, book)) in books.iter_mut().zip(keyed) {
        *slot = book;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookId;

    fn book(id: u64, title: &str, rating: f64, year: Option<i32>) -> Book {
        let mut b = Book::new(BookId::new(id), title, "Author", "science").with_rating(rating);
        b.year = year;
        b
    }

    fn ids(books: &[&Book]) -> Vec<u64> {
        books.iter().map(|b| b.id.value()).collect()
    }

    #[test]
    fn test_parse_fields() {
        assert_eq!(SortField::parse("rating").unwrap(), SortField::Rating);
        assert_eq!(SortField::parse("publicationYear").unwrap(), SortField::Year);
        for field in SortField::ALL {
            assert_eq!(SortField::parse(field.as_str()).unwrap(), field);
        }
        let err = SortField::parse("popularity").unwrap_err();
        assert_eq!(err.parameter(), "sortBy");
    }

    #[test]
    fn test_parse_order_falls_back_to_asc() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
        assert_eq!(SortOrder::parse(""), SortOrder::Asc);
    }

    #[test]
    fn test_sort_rating_desc() {
        let books = [
            book(1, "a", 4.8, None),
            book(2, "b", 4.3, None),
            book(3, "c", 4.5, None),
        ];
        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Rating, SortOrder::Desc);
        assert_eq!(ids(&refs), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let books = [
            book(1, "beta", 0.0, None),
            book(2, "Alpha", 0.0, None),
            book(3, "alpha", 0.0, None),
        ];
        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Title, SortOrder::Asc);
        assert_eq!(ids(&refs), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_values_last_then_first() {
        let books = [
            book(1, "a", 0.0, None),
            book(2, "b", 0.0, Some(2020)),
            book(3, "c", 0.0, Some(2010)),
        ];
        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Year, SortOrder::Asc);
        assert_eq!(ids(&refs), vec![3, 2, 1]);

        sort_books(&mut refs, SortField::Year, SortOrder::Desc);
        assert_eq!(ids(&refs), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let books = [
            book(1, "x", 4.0, None),
            book(2, "y", 4.0, None),
            book(3, "z", 5.0, None),
            book(4, "w", 4.0, None),
        ];
        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Rating, SortOrder::Asc);
        assert_eq!(ids(&refs), vec![1, 2, 4, 3]);

        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Rating, SortOrder::Desc);
        assert_eq!(ids(&refs), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_id_full_u64_range() {
        let books = [book(u64::MAX, "a", 0.0, None), book(1, "b", 0.0, None)];
        let mut refs: Vec<&Book> = books.iter().collect();
        sort_books(&mut refs, SortField::Id, SortOrder::Asc);
        assert_eq!(ids(&refs), vec![1, u64::MAX]);

        sort_books(&mut refs, SortField::Id, SortOrder::Desc);
        assert_eq!(ids(&refs), vec![u64::MAX, 1]);
    }
}
