pub mod domain;
pub mod factory;
pub mod queries;
pub mod repository;
