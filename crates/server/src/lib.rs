pub mod routes;
pub mod startup;
pub mod errors;
pub mod views;
pub mod params;
pub mod openapi;

pub use startup::run;
