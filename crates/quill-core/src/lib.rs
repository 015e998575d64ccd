//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` entity, its validation rules, the repository ports and the
//! `PostService` that drives every CRUD operation.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
