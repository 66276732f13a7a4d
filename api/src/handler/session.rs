use axum::{extract::State, Json};
use kernel::model::user::event::SwitchRole;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedUser, JsonBody},
    model::user::{SessionResponse, SwitchRoleRequest},
};

pub async fn show_session(user: AuthorizedUser) -> Json<SessionResponse> {
    Json(SessionResponse::from(user.user))
}

// ロール切り替えはセッションの作り直しに相当する
pub async fn switch_role(
    State(registry): State<AppRegistry>,
    JsonBody(req): JsonBody<SwitchRoleRequest>,
) -> AppResult<Json<SessionResponse>> {
    registry
        .auth_provider()
        .switch_role(SwitchRole::from(req))
        .await
        .map(SessionResponse::from)
        .map(Json)
}
