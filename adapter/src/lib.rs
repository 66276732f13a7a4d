pub mod clock;
pub mod preference;
pub mod repository;
