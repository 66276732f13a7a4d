use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, EnumString, AsRefStr, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    Resident,
    Owner,
    Board,
    Admin,
    FieldAgent,
}

impl Role {
    pub fn landing_page(self) -> &'static str {
        match self {
            Role::Resident => "/dashboard/resident",
            Role::Owner => "/dashboard/owner",
            Role::Board => "/dashboard/board",
            Role::Admin => "/admin",
            Role::FieldAgent => "/field",
        }
    }
}

/// Ordered, non-empty set of roles. The first entry is the primary role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn single(role: Role) -> Self {
        Self(vec![role])
    }

    /// Returns `None` for an empty list. Later duplicates are dropped.
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Option<Self> {
        let mut ordered: Vec<Role> = Vec::new();
        for role in roles {
            if !ordered.contains(&role) {
                ordered.push(role);
            }
        }
        (!ordered.is_empty()).then_some(Self(ordered))
    }

    pub fn primary(&self) -> Role {
        self.0[0]
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn intersects(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.contains(*r))
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    pub fn landing_page(&self) -> &'static str {
        self.primary().landing_page()
    }
}
