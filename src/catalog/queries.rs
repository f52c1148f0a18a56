use std::collections::HashMap;
use crate::catalog::domain::service::Catalog;

// Read-only views layered on the catalog's public record sequence.

pub fn available_titles(catalog: &Catalog) -> Vec<String> {
    catalog.books().iter()
        .filter(|book| book.available)
        .map(|book| book.title.to_string())
        .collect()
}

pub fn titles_by_author(catalog: &Catalog, author: &str) -> HashMap<String, String> {
    catalog.books().iter()
        .filter(|book| book.author == author)
        .map(|book| (book.isbn.to_string(), book.title.to_string()))
        .collect()
}
