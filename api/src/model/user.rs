use kernel::model::{
    capability::{self, Capability},
    role::{Role, RoleSet},
    user::{event::SwitchRole, User},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Resident,
    Owner,
    Board,
    Admin,
    FieldAgent,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Resident => Self::Resident,
            Role::Owner => Self::Owner,
            Role::Board => Self::Board,
            Role::Admin => Self::Admin,
            Role::FieldAgent => Self::FieldAgent,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Resident => Self::Resident,
            RoleName::Owner => Self::Owner,
            RoleName::Board => Self::Board,
            RoleName::Admin => Self::Admin,
            RoleName::FieldAgent => Self::FieldAgent,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesResponse {
    pub can_create_announcements: bool,
    pub can_manage_users: bool,
    pub can_view_board_area: bool,
    pub can_view_owner_content: bool,
    pub can_create_tickets_as_staff: bool,
}

impl From<&RoleSet> for CapabilitiesResponse {
    fn from(roles: &RoleSet) -> Self {
        Self {
            can_create_announcements: capability::can_create_announcements(roles),
            can_manage_users: capability::can_manage_users(roles),
            can_view_board_area: capability::can_view_board_area(roles),
            can_view_owner_content: capability::can_view_owner_content(roles),
            can_create_tickets_as_staff: capability::can_create_tickets_as_staff(roles),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<RoleName>,
    pub landing_page: String,
    pub capabilities: CapabilitiesResponse,
    pub granted: Vec<String>,
}

impl From<User> for SessionResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            full_name,
            email,
            roles,
        } = value;
        Self {
            user_id: user_id.to_string(),
            user_name,
            full_name,
            email,
            roles: roles.iter().map(RoleName::from).collect(),
            landing_page: roles.landing_page().to_string(),
            capabilities: CapabilitiesResponse::from(&roles),
            granted: Capability::granted_to(&roles)
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchRoleRequest {
    pub role: RoleName,
}

impl From<SwitchRoleRequest> for SwitchRole {
    fn from(value: SwitchRoleRequest) -> Self {
        SwitchRole::new(value.role.into())
    }
}
