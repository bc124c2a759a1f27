mod recipe_service;
mod recipe_service_factory;
mod id_generator;
pub mod models;

pub use recipe_service::*;
pub use recipe_service_factory::*;
pub use id_generator::*;
