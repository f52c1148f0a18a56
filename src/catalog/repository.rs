pub mod file_catalog_repository;

use crate::catalog::domain::service::Catalog;

// Repository abstraction for persisting one session's catalog wholesale.
// Both operations fail open: underlying I/O and serialization faults are
// logged and converted into a safe fallback instead of propagating.
pub trait CatalogRepository {
    // persists the full record sequence, overwriting the destination
    fn save(&self, catalog: &Catalog);

    // restores a previously saved catalog, empty when nothing can be read
    fn load(&self) -> Catalog;
}
