//! Permissions derived from a user's role set.
//!
//! Every predicate is a pure function of the roles; nothing here is stored.

use strum::{Display, EnumIter, IntoEnumIterator};

use super::role::{Role, RoleSet};

pub fn can_create_announcements(roles: &RoleSet) -> bool {
    roles.intersects(&[Role::Admin, Role::Board])
}

pub fn can_manage_users(roles: &RoleSet) -> bool {
    roles.contains(Role::Admin)
}

pub fn can_view_board_area(roles: &RoleSet) -> bool {
    roles.intersects(&[Role::Admin, Role::Board])
}

pub fn can_view_owner_content(roles: &RoleSet) -> bool {
    roles.intersects(&[Role::Admin, Role::Board, Role::Owner])
}

pub fn can_create_tickets_as_staff(roles: &RoleSet) -> bool {
    roles.intersects(&[Role::Admin, Role::FieldAgent])
}

#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Capability {
    CreateAnnouncements,
    ManageUsers,
    ViewBoardArea,
    ViewOwnerContent,
    CreateTicketsAsStaff,
}

impl Capability {
    pub fn is_granted(self, roles: &RoleSet) -> bool {
        match self {
            Capability::CreateAnnouncements => can_create_announcements(roles),
            Capability::ManageUsers => can_manage_users(roles),
            Capability::ViewBoardArea => can_view_board_area(roles),
            Capability::ViewOwnerContent => can_view_owner_content(roles),
            Capability::CreateTicketsAsStaff => can_create_tickets_as_staff(roles),
        }
    }

    /// All capabilities the role set grants, in declaration order.
    pub fn granted_to(roles: &RoleSet) -> Vec<Capability> {
        Capability::iter().filter(|c| c.is_granted(roles)).collect()
    }
}
