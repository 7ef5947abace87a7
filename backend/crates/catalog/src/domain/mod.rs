//! Catalog Domain Layer

pub mod entities;
pub mod page;
pub mod query;
pub mod repository;
