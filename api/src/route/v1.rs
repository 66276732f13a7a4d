use super::{
    announcement::build_announcement_routers, assistant::build_assistant_routers,
    health::build_health_check_routers, session::build_session_routers,
    ticket::build_ticket_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_session_routers())
        .merge(build_ticket_routers())
        .merge(build_announcement_routers())
        .merge(build_assistant_routers());
    Router::new().nest("/api/v1", router)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use std::time::Duration;

    use adapter::preference::MemoryPreferenceStore;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use chrono::{DateTime, Local, TimeZone};
    use http_body_util::BodyExt;
    use kernel::{clock::Clock, model::ticket::event::CreateTicket};
    use registry::AppRegistry;
    use rstest::rstest;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::routes;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    fn registry() -> AppRegistry {
        let now = Local.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();
        AppRegistry::with_parts(
            Arc::new(FixedClock(now)),
            Arc::new(MemoryPreferenceStore::new()),
        )
        .unwrap()
    }

    fn app() -> Router {
        routes().with_state(registry())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn switch_to(app: &Router, role: &str) {
        let (status, _) = send(
            app,
            Method::PUT,
            "/api/v1/session/role",
            Some(json!({ "role": role })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (status, _) = send(&app(), Method::GET, "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn session_defaults_to_resident() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roles"], json!(["resident"]));
        assert_eq!(body["landingPage"], "/dashboard/resident");
        assert_eq!(body["capabilities"]["canManageUsers"], false);
        assert_eq!(body["granted"], json!([]));
    }

    #[rstest]
    #[case("admin", true, true, true)]
    #[case("board", false, true, false)]
    #[case("owner", false, false, false)]
    #[case("field-agent", false, false, true)]
    #[tokio::test]
    async fn switching_role_changes_capabilities(
        #[case] role: &str,
        #[case] manage_users: bool,
        #[case] board_area: bool,
        #[case] staff_tickets: bool,
    ) {
        let app = app();
        switch_to(&app, role).await;

        let (_, body) = send(&app, Method::GET, "/api/v1/session", None).await;
        assert_eq!(body["roles"], json!([role]));
        assert_eq!(body["capabilities"]["canManageUsers"], manage_users);
        assert_eq!(body["capabilities"]["canViewBoardArea"], board_area);
        assert_eq!(body["capabilities"]["canCreateTicketsAsStaff"], staff_tickets);
    }

    #[tokio::test]
    async fn unknown_role_is_rejected() {
        let (status, body) = send(
            &app(),
            Method::PUT,
            "/api/v1/session/role",
            Some(json!({ "role": "superuser" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn seeded_ticket_is_readable_by_id() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/tickets/T2024-07-002", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requester"], "Herr Schmidt");
        assert_eq!(body["status"], "Offen");

        let (status, _) = send(&app(), Method::GET, "/api/v1/tickets/T2030-01-999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app(), Method::GET, "/api/v1/tickets/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn resident_submits_and_sees_own_ticket() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/tickets",
            Some(json!({
                "subject": "Test",
                "requester": "Max Mustermann",
                "email": "max.mustermann@weg-portal.example",
                "attachments": [{ "fileName": "foto.jpg", "sizeBytes": 2048 }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ticketId"], "T2025-03-005");

        let (_, mine) = send(&app, Method::GET, "/api/v1/tickets/mine", None).await;
        let items = mine["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["status"], "Erstellt");
        assert_eq!(items[0]["origin"]["submittedAs"], "resident");
        assert_eq!(items[0]["attachments"][0]["fileName"], "foto.jpg");
    }

    #[tokio::test]
    async fn ticket_submission_is_validated() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/tickets",
            Some(json!({ "subject": "", "requester": "X" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/tickets",
            Some(json!({ "subject": "Test" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/tickets",
            Some(json!({ "subject": "Test", "requester": "X", "status": "Erledigt" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn only_staff_files_on_behalf_of_residents() {
        let app = app();
        let on_behalf = json!({
            "subject": "Zählerstand ablesen",
            "requester": "Herr Schmidt",
            "address": "Lindenweg 3, 2. OG links",
            "ownerName": "Herr Schmidt"
        });

        let (status, _) = send(&app, Method::POST, "/api/v1/tickets", Some(on_behalf.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        switch_to(&app, "field-agent").await;
        let (status, body) = send(&app, Method::POST, "/api/v1/tickets", Some(on_behalf)).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/v1/tickets/{}", body["ticketId"].as_str().unwrap());
        let (_, ticket) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(ticket["origin"]["submittedAs"], "field-agent");
        assert_eq!(ticket["origin"]["address"], "Lindenweg 3, 2. OG links");
    }

    #[tokio::test]
    async fn board_updates_status_and_residents_cannot() {
        let app = app();
        let uri = "/api/v1/tickets/T2024-07-002";

        let (status, _) = send(&app, Method::PATCH, uri, Some(json!({ "status": "Erledigt" }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        switch_to(&app, "board").await;
        let (_, before) = send(&app, Method::GET, uri, None).await;
        let (status, _) = send(&app, Method::PATCH, uri, Some(json!({ "status": "Erledigt" }))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, after) = send(&app, Method::GET, uri, None).await;
        assert_eq!(after["status"], "Erledigt");
        let mut expected = before.clone();
        expected["status"] = json!("Erledigt");
        assert_eq!(after, expected);

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/v1/tickets/T2030-01-999",
            Some(json!({ "status": "Offen" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn full_ticket_list_requires_board_or_staff() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/api/v1/tickets", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        switch_to(&app, "admin").await;
        let (status, body) = send(&app, Method::GET, "/api/v1/tickets", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["ticketId"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["T2024-07-004", "T2024-07-003", "T2024-07-002", "T2024-07-001"]
        );
    }

    #[tokio::test]
    async fn owner_announcements_follow_capabilities() {
        let app = app();
        let announcement = json!({
            "title": "Eigentümerversammlung",
            "body": "Einladung folgt per Post.",
            "audience": "owners"
        });

        let (status, _) = send(&app, Method::POST, "/api/v1/announcements", Some(announcement.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        switch_to(&app, "board").await;
        let (status, _) = send(&app, Method::POST, "/api/v1/announcements", Some(announcement)).await;
        assert_eq!(status, StatusCode::CREATED);

        switch_to(&app, "owner").await;
        let (_, body) = send(&app, Method::GET, "/api/v1/announcements", None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["author"], "Max Mustermann");

        switch_to(&app, "resident").await;
        let (_, body) = send(&app, Method::GET, "/api/v1/announcements", None).await;
        assert!(body["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn echo_returns_message_or_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/echo", Some(json!({ "message": "Hallo" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "echoed": "Hallo" }));

        let (status, _) = send(&app, Method::POST, "/api/v1/echo", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/api/v1/echo", Some(json!({ "message": 42 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn agenda_item_is_improved_by_rules() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/agenda/improve",
            Some(json!({ "title": "Hausgeld 2025", "description": "Erhöhung um 5 %" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["improvedTitle"], "Beschlussfassung über Finanzen: Hausgeld 2025");
        assert_eq!(body["voteRequired"], true);
        assert_eq!(body["legalNotes"].as_array().unwrap().len(), 1);

        let (_, body) = send(
            &app(),
            Method::POST,
            "/api/v1/agenda/improve",
            Some(json!({ "title": "Sommerfest", "description": "" })),
        )
        .await;
        assert!(body.get("legalNotes").is_none());
        assert_eq!(body["voteRequired"], false);
    }

    // SSE のフレームから event / id / data を取り出す
    async fn next_event(body: &mut Body) -> (String, String, Value) {
        let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        let bytes = frame.into_data().unwrap();
        let text = std::str::from_utf8(&bytes).unwrap().to_string();
        let field = |name: &str| {
            text.lines()
                .find_map(|line| line.strip_prefix(name))
                .map(str::to_string)
                .unwrap_or_default()
        };
        let data = serde_json::from_str(&field("data: ")).unwrap();
        (field("event: "), field("id: "), data)
    }

    #[tokio::test]
    async fn ticket_events_stream_the_latest_snapshot() {
        let registry = registry();
        let app = routes().with_state(registry.clone());

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tickets/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream"));
        let mut body = res.into_body();

        let (event, id, data) = next_event(&mut body).await;
        assert_eq!(event, "snapshot");
        assert_eq!(id, "0");
        assert_eq!(data["revision"], 0);
        assert_eq!(data["items"].as_array().unwrap().len(), 4);

        let ticket_id = registry
            .ticket_repository()
            .add(CreateTicket::new("Aufzug defekt", "Frau Müller"))
            .await
            .unwrap();

        let (event, id, data) = next_event(&mut body).await;
        assert_eq!(event, "snapshot");
        assert_eq!(id, "1");
        let items = data["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["ticketId"], ticket_id.as_str());
        assert_eq!(items[0]["ticketId"], "T2025-03-005");
    }
}
