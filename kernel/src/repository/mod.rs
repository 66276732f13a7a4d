pub mod announcement;
pub mod auth;
pub mod preference;
pub mod ticket;
