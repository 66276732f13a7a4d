pub mod agenda;
pub mod announcement;
pub mod capability;
pub mod id;
pub mod role;
pub mod ticket;
pub mod user;
