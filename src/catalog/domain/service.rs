use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog owns the ordered book collection for one session. Records are kept
// in insertion order; display order is recomputed per view.
#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
    books: Vec<BookEntity>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn from_books(books: Vec<BookEntity>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add_book(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    // First record with a matching ISBN wins, so a borrowed first copy hides
    // an available duplicate behind it.
    pub fn borrow_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) if book.available => {
                book.available = false;
                Ok(book.clone())
            }
            Some(book) => {
                Err(LibraryError::already_borrowed(
                    format!("book with isbn {} is already borrowed", book.isbn).as_str()))
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book with isbn {} not found", isbn).as_str()))
            }
        }
    }

    pub fn return_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) if !book.available => {
                book.available = true;
                Ok(book.clone())
            }
            Some(book) => {
                Err(LibraryError::not_borrowed(
                    format!("book with isbn {} was not borrowed", book.isbn).as_str()))
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book with isbn {} not found", isbn).as_str()))
            }
        }
    }

    // Stable sort, so copies with equal titles keep their insertion order.
    pub fn books_by_title(&self) -> Vec<BookEntity> {
        let mut sorted = self.books.clone();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        sorted
    }
}
