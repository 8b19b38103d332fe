//! Service layer for the person registry.
//! - `persona`: repository abstraction over the models crate and the business service
//! - `chart`: age-vs-id comparison chart rendered to PNG
//! - `pagination`: lenient limit/offset handling shared by handlers and repositories

pub mod errors;
pub mod pagination;
pub mod persona;
pub mod chart;
#[cfg(test)]
pub mod test_support;
