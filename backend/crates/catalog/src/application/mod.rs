//! Catalog Application Layer - Orchestration Services

pub mod ciudades;
pub mod config;
pub mod paises;

pub use ciudades::{CiudadInput, CiudadService};
pub use paises::{PaisInput, PaisService};
