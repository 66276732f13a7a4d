use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        role::{Role, RoleSet},
        user::{event::SwitchRole, User},
    },
    repository::{
        auth::AuthProvider,
        preference::{PreferenceStore, ROLE_PREFERENCE_KEY},
    },
};
use shared::error::AppResult;
use uuid::Uuid;

pub const DEMO_USER_ID: UserId = UserId::from_uuid(Uuid::from_u128(1));
pub const DEMO_USER_NAME: &str = "Max";
pub const DEMO_USER_FULL_NAME: &str = "Max Mustermann";
pub const DEMO_USER_EMAIL: &str = "max.mustermann@weg-portal.example";

/// Simulated session: a fixed identity whose role comes from the stored
/// preference. Nothing is cached, so every call reflects the latest switch.
#[derive(new)]
pub struct StoredRoleAuthProvider {
    store: Arc<dyn PreferenceStore>,
}

impl StoredRoleAuthProvider {
    async fn stored_role(&self) -> AppResult<Role> {
        let Some(raw) = self.store.get(ROLE_PREFERENCE_KEY).await? else {
            return Ok(Role::Resident);
        };
        match Role::from_str(&raw) {
            Ok(role) => Ok(role),
            Err(_) => {
                tracing::warn!(value = %raw, "stored role is unknown, falling back to resident");
                // 不正な値は消しておく
                self.store.remove(ROLE_PREFERENCE_KEY).await?;
                Ok(Role::Resident)
            }
        }
    }
}

fn demo_user(role: Role) -> User {
    User {
        user_id: DEMO_USER_ID,
        user_name: DEMO_USER_NAME.into(),
        full_name: DEMO_USER_FULL_NAME.into(),
        email: DEMO_USER_EMAIL.into(),
        roles: RoleSet::single(role),
    }
}

#[async_trait]
impl AuthProvider for StoredRoleAuthProvider {
    async fn current_user(&self) -> AppResult<User> {
        Ok(demo_user(self.stored_role().await?))
    }

    async fn switch_role(&self, event: SwitchRole) -> AppResult<User> {
        self.store
            .set(ROLE_PREFERENCE_KEY, event.role.as_ref())
            .await?;
        tracing::info!(role = %event.role, "session role switched");
        self.current_user().await
    }
}
