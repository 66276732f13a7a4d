pub mod announcement;
pub mod assistant;
pub mod health;
pub mod session;
pub mod ticket;
pub mod v1;
