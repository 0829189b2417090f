pub mod filmwork;
pub mod genre;
pub mod person;
pub mod search_engine;
