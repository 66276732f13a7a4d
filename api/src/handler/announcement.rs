use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::capability::Capability;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedUser, JsonBody},
    model::announcement::{
        AnnouncementsResponse, CreateAnnouncementRequest, CreateAnnouncementRequestWithAuthor,
        CreateAnnouncementResponse,
    },
};

pub async fn show_announcements(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AnnouncementsResponse>> {
    registry
        .announcement_repository()
        .find_visible(user.can(Capability::ViewOwnerContent))
        .await
        .map(AnnouncementsResponse::from)
        .map(Json)
}

pub async fn register_announcement(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    JsonBody(req): JsonBody<CreateAnnouncementRequest>,
) -> AppResult<(StatusCode, Json<CreateAnnouncementResponse>)> {
    user.require_any(&[Capability::CreateAnnouncements])?;
    req.validate(&())?;

    let event = CreateAnnouncementRequestWithAuthor::new(user.user.full_name.clone(), req);
    let announcement_id = registry
        .announcement_repository()
        .create(event.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateAnnouncementResponse {
            announcement_id: announcement_id.to_string(),
        }),
    ))
}
