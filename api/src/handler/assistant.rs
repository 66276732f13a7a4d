use axum::Json;
use garde::Validate;
use kernel::model::agenda;
use shared::error::AppResult;

use crate::{
    extractor::JsonBody,
    model::assistant::{EchoRequest, EchoResponse, ImproveAgendaRequest, ImproveAgendaResponse},
};

pub async fn echo(JsonBody(req): JsonBody<EchoRequest>) -> Json<EchoResponse> {
    Json(EchoResponse {
        echoed: req.message,
    })
}

pub async fn improve_agenda_item(
    JsonBody(req): JsonBody<ImproveAgendaRequest>,
) -> AppResult<Json<ImproveAgendaResponse>> {
    req.validate(&())?;

    let improved = agenda::improve(&req.into());
    Ok(Json(improved.into()))
}
