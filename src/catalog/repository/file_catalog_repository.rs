use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::service::Catalog;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::LibraryResult;

// FileCatalogRepository stores the record sequence as a JSON array in a
// single file. A crash mid-write can leave a corrupt blob behind; load
// treats that the same as any other unreadable file.
pub struct FileCatalogRepository {
    path: PathBuf,
}

impl FileCatalogRepository {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    fn try_save(&self, books: &[BookEntity]) -> LibraryResult<()> {
        let file = File::create(self.path.as_path())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, books)?;
        writer.flush()?;
        Ok(())
    }

    fn try_load(&self) -> LibraryResult<Vec<BookEntity>> {
        let file = File::open(self.path.as_path())?;
        let books = serde_json::from_reader(BufReader::new(file))?;
        Ok(books)
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn save(&self, catalog: &Catalog) {
        match self.try_save(catalog.books()) {
            Ok(_) => {
                info!("saved {} books to {}", catalog.books().len(), self.path.display());
            }
            Err(err) => {
                warn!("file couldn't be saved: {}", err);
            }
        }
    }

    fn load(&self) -> Catalog {
        match self.try_load() {
            Ok(books) => {
                info!("loaded {} books from {}", books.len(), self.path.display());
                Catalog::from_books(books)
            }
            Err(err) => {
                warn!("file couldn't be loaded: {}", err);
                Catalog::new()
            }
        }
    }
}
