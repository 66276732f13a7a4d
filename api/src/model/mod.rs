pub mod announcement;
pub mod assistant;
pub mod ticket;
pub mod user;
