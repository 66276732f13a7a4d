use crate::model::{id::UserId, role::RoleSet};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub roles: RoleSet,
}
