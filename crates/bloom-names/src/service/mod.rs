//! Service Layer
//!
//! Wraps the domain filter for shared, concurrent use.

pub mod name_filter_service;

pub use name_filter_service::NameFilterService;
