pub mod domain;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod service;

pub use domain::Genre;
pub use repository::{EsGenreRepository, GenreRepository};
pub use service::GenreService;
