use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use garde::Validate;
use kernel::model::{capability::Capability, id::TicketId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tokio_stream::{wrappers::WatchStream, Stream, StreamExt};

use crate::{
    extractor::{AuthorizedUser, JsonBody},
    model::ticket::{
        CreateTicketRequest, CreateTicketRequestWithRole, CreateTicketResponse,
        TicketResponse, TicketSnapshotResponse, TicketsResponse, UpdateTicketRequest,
        UpdateTicketRequestWithId,
    },
};

// 全件一覧と更新は理事会エリアまたはスタッフ権限が必要
const TICKET_STAFF: &[Capability] = &[Capability::ViewBoardArea, Capability::CreateTicketsAsStaff];

pub async fn register_ticket(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    JsonBody(req): JsonBody<CreateTicketRequest>,
) -> AppResult<(StatusCode, Json<CreateTicketResponse>)> {
    req.validate(&())?;
    if req.is_on_behalf() {
        user.require_any(&[Capability::CreateTicketsAsStaff])?;
    }

    let event = CreateTicketRequestWithRole::new(user.roles().primary(), req);
    let ticket_id = registry.ticket_repository().add(event.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateTicketResponse {
            ticket_id: ticket_id.to_string(),
        }),
    ))
}

pub async fn show_ticket_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketsResponse>> {
    user.require_any(TICKET_STAFF)?;

    registry
        .ticket_repository()
        .find_all()
        .await
        .map(TicketsResponse::from)
        .map(Json)
}

pub async fn show_my_tickets(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketsResponse>> {
    registry
        .ticket_repository()
        .find_by_requester(&user.user.full_name)
        .await
        .map(TicketsResponse::from)
        .map(Json)
}

pub async fn show_ticket(
    _user: AuthorizedUser,
    Path(ticket_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketResponse>> {
    let ticket_id: TicketId = ticket_id.parse()?;
    registry
        .ticket_repository()
        .find_by_id(&ticket_id)
        .await
        .and_then(|t| match t {
            Some(t) => Ok(Json(t.into())),
            None => Err(AppError::EntityNotFound(format!(
                "ticket ({ticket_id}) was not found"
            ))),
        })
}

pub async fn update_ticket(
    user: AuthorizedUser,
    Path(ticket_id): Path<String>,
    State(registry): State<AppRegistry>,
    JsonBody(req): JsonBody<UpdateTicketRequest>,
) -> AppResult<StatusCode> {
    user.require_any(TICKET_STAFF)?;
    req.validate(&())?;

    let ticket_id: TicketId = ticket_id.parse()?;
    let update_ticket = UpdateTicketRequestWithId::new(ticket_id, req);
    registry
        .ticket_repository()
        .update(update_ticket.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn stream_ticket_events(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let changes = WatchStream::new(registry.ticket_repository().subscribe());
    let events = changes.map(|snapshot| {
        let revision = snapshot.revision;
        let body = TicketSnapshotResponse::from(snapshot);
        let event = Event::default()
            .event("snapshot")
            .id(revision.to_string())
            .json_data(body)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to encode ticket snapshot");
                Event::default().event("error").data("snapshot unavailable")
            });
        Ok(event)
    });
    Sse::new(events).keep_alive(KeepAlive::default())
}
