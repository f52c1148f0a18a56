use std::path::Path;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::file_catalog_repository::FileCatalogRepository;

pub fn create_catalog_repository(path: &Path) -> Box<dyn CatalogRepository> {
    Box::new(FileCatalogRepository::new(path))
}
