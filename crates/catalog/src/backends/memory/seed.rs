//! Sample catalog used to seed a fresh in-memory backend.

use crate::types::NewBook;

struct Sample {
    title: &'static str,
    author: &'static str,
    category: &'static str,
    rating: f64,
    year: i32,
    description: &'static str,
    tags: &'static [&'static str],
    pages: Option<u32>,
    isbn: &'static str,
}

const SAMPLES: [Sample; 8] = [
    Sample {
        title: "The AI Revolution",
        author: "Dr. Alan Turing",
        category: "science",
        rating: 4.8,
        year: 2023,
        description: "A comprehensive guide to artificial intelligence and its impact on society.",
        tags: &["ai", "machine learning", "future"],
        pages: Some(320),
        isbn: "978-1234567890",
    },
    Sample {
        title: "Digital Transformation",
        author: "Sarah Johnson",
        category: "technology",
        rating: 4.5,
        year: 2022,
        description: "Exploring how digital technologies are reshaping businesses and industries.",
        tags: &["business", "digital", "strategy"],
        pages: Some(280),
        isbn: "978-0987654321",
    },
    Sample {
        title: "The Quantum World",
        author: "Prof. Richard Feynman",
        category: "physics",
        rating: 4.9,
        year: 2023,
        description: "An accessible tour of quantum mechanics, from wave functions to entanglement.",
        tags: &["quantum", "physics", "science"],
        pages: None,
        isbn: "",
    },
    Sample {
        title: "Machine Learning Basics",
        author: "Dr. Emily Chen",
        category: "computer-science",
        rating: 4.7,
        year: 2022,
        description: "Core machine learning algorithms explained with worked programming examples.",
        tags: &["machine learning", "programming", "algorithms"],
        pages: None,
        isbn: "",
    },
    Sample {
        title: "Data Science Handbook",
        author: "Michael Zhang",
        category: "data-science",
        rating: 4.6,
        year: 2023,
        description: "Statistics, visualisation and modelling techniques for working data scientists.",
        tags: &["data", "statistics", "python"],
        pages: None,
        isbn: "",
    },
    Sample {
        title: "Web Development Fundamentals",
        author: "Jessica Williams",
        category: "technology",
        rating: 4.4,
        year: 2022,
        description: "Building modern websites with HTML, CSS and JavaScript programming.",
        tags: &["web", "programming", "javascript"],
        pages: None,
        isbn: "",
    },
    Sample {
        title: "The History of Computing",
        author: "Robert Brown",
        category: "history",
        rating: 4.3,
        year: 2021,
        description: "From mechanical calculators to cloud computing, the people and machines behind the digital age.",
        tags: &["history", "computing"],
        pages: None,
        isbn: "",
    },
    Sample {
        title: "Artificial Intelligence Ethics",
        author: "Dr. Lisa Anderson",
        category: "ethics",
        rating: 4.8,
        year: 2023,
        description: "Fairness, accountability and transparency in artificial intelligence systems.",
        tags: &["ai", "ethics", "society"],
        pages: None,
        isbn: "",
    },
];

/// Returns the sample books in catalog order.
pub fn sample_books() -> Vec<NewBook> {
    SAMPLES
        .iter()
        .map(|s| NewBook {
            description: Some(s.description.to_string()),
            rating: Some(s.rating),
            year: Some(s.year),
            tags: Some(s.tags.iter().map(|t| t.to_string()).collect()),
            pages: s.pages,
            isbn: Some(s.isbn.to_string()),
            ..NewBook::new(s.title, s.author, s.category)
        })
        .collect()
}
