pub mod announcement;
pub mod auth;
pub mod seed;
pub mod ticket;
