//! Person registry: domain types, repository abstraction and business service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{AgeReport, NewPersona, Persona};
pub use repository::{PersonaRepository, SeaOrmPersonaRepository};
pub use service::PersonaService;
