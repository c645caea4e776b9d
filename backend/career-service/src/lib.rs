pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use catalog::{Catalog, CatalogError, Lexicon};
pub use config::Config;
pub use services::RecommendationEngine;
