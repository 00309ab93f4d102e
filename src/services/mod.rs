// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod statistics_service;


pub use catalog_service::{compare_authors, Catalog, CatalogConfig, SortOrder};

pub use statistics_service::calculate_library_statistics;
