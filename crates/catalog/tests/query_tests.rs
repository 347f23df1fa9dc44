//! Query engine integration tests.
//!
//! Covers the ordering and pagination guarantees of the engine together with
//! the reference scenarios for each pipeline stage.

mod common;

use std::collections::HashSet;

use libris_catalog::error::QueryError;
use libris_catalog::query::{Criteria, execute};
use libris_catalog::types::{QueryRequest, YearRange};

use common::{book, five_books, ids, shelf};

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_same_input_same_output() {
    let books = shelf(40);
    let request = QueryRequest::new()
        .with_categories(["science", "physics"])
        .with_min_rating(3.0)
        .with_sort("rating", "desc")
        .with_page(2, 3);

    let first = execute(&books, &request).unwrap();
    let second = execute(&books, &request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_filtering_is_idempotent() {
    let books = shelf(40);
    let request = QueryRequest::new()
        .with_category("technology")
        .with_year_range(YearRange::between(2002, 2008));
    let criteria = Criteria::from_request(&request).unwrap();

    let once: Vec<_> = criteria.filter(&books).into_iter().cloned().collect();
    let twice: Vec<_> = criteria.filter(&once).into_iter().cloned().collect();
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_pages_cover_all_matches_exactly_once() {
    let books = shelf(37);
    let request = QueryRequest::new()
        .with_min_rating(2.5)
        .with_sort("title", "asc");

    let total = execute(&books, &request.clone().with_page(1, 1000))
        .unwrap()
        .total;

    for page_size in [1, 3, 4, 10, 37, 50] {
        let first = execute(&books, &request.clone().with_page(1, page_size)).unwrap();
        let mut seen = Vec::new();
        for page in 1..=first.total_pages as i64 {
            let result = execute(&books, &request.clone().with_page(page, page_size)).unwrap();
            assert_eq!(result.total, total);
            seen.extend(ids(&result.books));
        }
        assert_eq!(seen.len() as u64, total, "page size {page_size}");
        let unique: HashSet<u64> = seen.iter().copied().collect();
        assert_eq!(unique.len(), seen.len(), "page size {page_size}");
    }
}

#[test]
fn test_equal_keys_keep_filtered_order() {
    let books = shelf(40);
    let request = QueryRequest::new().with_sort("rating", "asc").with_page(1, 100);
    let result = execute(&books, &request).unwrap();

    for pair in result.books.windows(2) {
        if pair[0].rating == pair[1].rating {
            assert!(pair[0].id < pair[1].id, "ties must keep collection order");
        }
    }

    let request = QueryRequest::new().with_sort("rating", "desc").with_page(1, 100);
    let result = execute(&books, &request).unwrap();
    for pair in result.books.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
        if pair[0].rating == pair[1].rating {
            assert!(pair[0].id < pair[1].id, "ties must keep collection order");
        }
    }
}

#[test]
fn test_boundary_page() {
    let books = shelf(20);
    let request = QueryRequest::new().with_page(4, 5);
    let result = execute(&books, &request).unwrap();
    assert_eq!(result.total, 20);
    assert_eq!(result.books.len(), 5);
    assert_eq!(result.total_pages, 4);
    assert!(!result.has_next_page);
    assert!(result.has_prev_page);

    let past = execute(&books, &QueryRequest::new().with_page(5, 5)).unwrap();
    assert!(past.books.is_empty());
    assert!(!past.has_next_page);
}

#[test]
fn test_empty_collection() {
    let result = execute(&[], &QueryRequest::new()).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
    assert!(!result.has_next_page);
    assert!(!result.has_prev_page);
}

#[test]
fn test_input_not_mutated() {
    let books = five_books();
    let before = books.clone();
    execute(&books, &QueryRequest::new().with_sort("title", "desc")).unwrap();
    assert_eq!(books, before);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_category_filter() {
    let books = five_books();
    let result = execute(&books, &QueryRequest::new().with_category("science")).unwrap();
    assert_eq!(result.total, 2);
    assert_eq!(ids(&result.books), vec![1, 3]);
}

#[test]
fn test_scenario_search_term_any_case() {
    let books = five_books();
    for term in ["digital", "DIGITAL", "Digital"] {
        let result = execute(&books, &QueryRequest::new().with_search_term(term)).unwrap();
        assert_eq!(ids(&result.books), vec![2, 4], "term {term}");
    }
}

#[test]
fn test_scenario_sort_rating_desc() {
    let books = vec![
        book(1, "A", "x", 4.8, None),
        book(2, "B", "x", 4.3, None),
        book(3, "C", "x", 4.5, None),
    ];
    let result = execute(&books, &QueryRequest::new().with_sort("rating", "desc")).unwrap();
    let ratings: Vec<f64> = result.books.iter().map(|b| b.rating).collect();
    assert_eq!(ratings, vec![4.8, 4.5, 4.3]);
}

#[test]
fn test_scenario_second_page() {
    let books = five_books();
    let result = execute(&books, &QueryRequest::new().with_page(2, 2)).unwrap();
    assert_eq!(ids(&result.books), vec![3, 4]);
    assert!(result.has_next_page);
    assert!(result.has_prev_page);
    assert_eq!(result.total_pages, 3);
}

#[test]
fn test_scenario_open_year_range() {
    let books = vec![
        book(1, "A", "x", 1.0, Some(2021)),
        book(2, "B", "x", 1.0, Some(2022)),
        book(3, "C", "x", 1.0, Some(2023)),
        book(4, "D", "x", 1.0, Some(2023)),
    ];
    let request = QueryRequest::new().with_year_range(YearRange::from(2023));
    let result = execute(&books, &request).unwrap();
    assert_eq!(ids(&result.books), vec![3, 4]);
}

#[test]
fn test_scenario_zero_page_size() {
    let err = execute(&five_books(), &QueryRequest::new().with_page(1, 0)).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument { ref parameter, .. } if parameter == "pageSize"));
}

// ============================================================================
// Sort policies
// ============================================================================

#[test]
fn test_missing_year_sorts_last_ascending_first_descending() {
    let books = five_books();

    let asc = execute(&books, &QueryRequest::new().with_sort("publicationYear", "asc")).unwrap();
    assert_eq!(ids(&asc.books), vec![3, 2, 1, 4, 5]);

    let desc = execute(&books, &QueryRequest::new().with_sort("year", "desc")).unwrap();
    assert_eq!(ids(&desc.books), vec![5, 1, 4, 2, 3]);
}

#[test]
fn test_unknown_sort_order_is_ascending() {
    let books = five_books();
    let odd = execute(&books, &QueryRequest::new().with_sort("title", "upward")).unwrap();
    let asc = execute(&books, &QueryRequest::new().with_sort("title", "asc")).unwrap();
    assert_eq!(ids(&odd.books), ids(&asc.books));
}

#[test]
fn test_sort_by_created_at_desc() {
    let books = five_books();
    let result = execute(&books, &QueryRequest::new().with_sort("createdAt", "desc")).unwrap();
    assert_eq!(ids(&result.books), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_sort_by_id_above_i64_range() {
    let books = vec![
        book(u64::MAX, "Last Shelf", "science", 4.0, Some(2020)),
        book(1, "First Shelf", "science", 4.0, Some(2020)),
    ];
    let result = execute(&books, &QueryRequest::new().with_sort("id", "asc")).unwrap();
    assert_eq!(ids(&result.books), vec![1, u64::MAX]);
}
