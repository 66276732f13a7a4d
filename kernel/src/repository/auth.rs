use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    capability::Capability,
    user::{event::SwitchRole, User},
};

/// Identity seam between handlers and whatever decides who the user is.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self) -> AppResult<User>;
    // 新しいロールを保存し、セッションを作り直した結果を返す
    async fn switch_role(&self, event: SwitchRole) -> AppResult<User>;

    async fn has_capability(&self, capability: Capability) -> AppResult<bool> {
        let user = self.current_user().await?;
        Ok(capability.is_granted(&user.roles))
    }
}
