use crate::model::role::Role;
use derive_new::new;

#[derive(Debug, new)]
pub struct SwitchRole {
    pub role: Role,
}
