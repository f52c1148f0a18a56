use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// BookEntity abstracts one physical copy in the catalog. The ISBN is the
// identifying key but uniqueness is not enforced, so several copies may
// share an ISBN and lookups act on the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available: true,
        }
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, ISBN: {}, Available: {}",
               self.title, self.author, self.isbn, self.available)
    }
}
