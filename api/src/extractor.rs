use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use kernel::model::{capability::Capability, role::RoleSet, user::User};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// The user of the simulated session, resolved anew for every request.
pub struct AuthorizedUser {
    pub user: User,
}

impl AuthorizedUser {
    pub fn roles(&self) -> &RoleSet {
        &self.user.roles
    }

    pub fn can(&self, capability: Capability) -> bool {
        capability.is_granted(&self.user.roles)
    }

    pub fn require_any(&self, capabilities: &[Capability]) -> AppResult<()> {
        if capabilities.iter().any(|c| self.can(*c)) {
            Ok(())
        } else {
            Err(AppError::ForbiddenOperation)
        }
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let user = registry.auth_provider().current_user().await?;
        Ok(Self { user })
    }
}

/// `Json` whose rejections become `400 Bad Request` in the common error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
