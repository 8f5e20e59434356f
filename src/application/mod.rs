/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services and talks to infrastructure
/// through the outbound ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod registry_catalog;
pub mod use_cases;

pub use registry_catalog::RegistryCatalog;
