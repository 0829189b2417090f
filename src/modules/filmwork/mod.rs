pub mod domain;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod service;

pub use domain::{FilmworkDetail, FilmworkSummary};
pub use repository::{EsFilmworkRepository, FilmworkRepository};
pub use service::FilmworkService;
