pub mod aggregation;
pub mod domain;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod service;

pub use domain::{Person, PersonCredits, PersonRef, RoleKind};
pub use repository::{EsPersonRepository, PersonRepository};
pub use service::PersonService;
