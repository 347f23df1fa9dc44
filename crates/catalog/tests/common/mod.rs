//! Shared fixtures for catalog integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};

use libris_catalog::types::{Book, BookId};

/// Builds a book with the fields the query engine looks at.
pub fn book(id: u64, title: &str, category: &str, rating: f64, year: Option<i32>) -> Book {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
        + chrono::Duration::minutes(id as i64);
    let mut book = Book::new(BookId::new(id), title, format!("Author {id}"), category)
        .with_rating(rating)
        .with_created_at(created);
    book.year = year;
    book
}

/// Five books, two of them in "science".
pub fn five_books() -> Vec<Book> {
    vec![
        book(1, "The AI Revolution", "science", 4.8, Some(2023)),
        book(2, "Digital Transformation", "technology", 4.3, Some(2022)),
        book(3, "The Quantum World", "Science", 4.5, Some(2021)),
        book(4, "Digital Age Economics", "economics", 4.2, Some(2023)),
        book(5, "The History of Computing", "history", 4.3, None),
    ]
}

/// A larger collection with many rating ties, for ordering properties.
pub fn shelf(size: u64) -> Vec<Book> {
    let categories = ["science", "technology", "history", "physics"];
    (1..=size)
        .map(|id| {
            let category = categories[(id % 4) as usize];
            let rating = ((id * 7) % 6) as f64 * 0.5 + 2.0;
            let year = if id % 5 == 0 { None } else { Some(2000 + (id % 10) as i32) };
            book(id, &format!("Volume {}", (id * 13) % 17), category, rating, year)
        })
        .collect()
}

/// Extracts raw ids in order.
pub fn ids(books: &[Book]) -> Vec<u64> {
    books.iter().map(|b| b.id.value()).collect()
}
