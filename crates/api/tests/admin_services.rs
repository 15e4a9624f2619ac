//! HTTP-level tests for `/admin/services`.

mod common;

use axum::http::StatusCode;
use common::{assert_redirect, body_text, get, login, post_form, spawn_app};
use folio_db::models::service::ServiceInput;
use folio_db::repositories::ServiceRepo;

const VALID_BODY: &str = "name=Web+Design&description=Responsive+sites+for+small+businesses.";

#[tokio::test]
async fn invalid_service_reports_every_rule_and_persists_nothing() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/admin/services",
        "name=A&description=short",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/services");

    assert!(ServiceRepo::list(&app.pool).await.unwrap().is_empty());

    let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    assert!(html.contains(
        "Service name must be at least 2 characters. Description must be at least 10 characters."
    ));
    assert!(html.contains("value=\"A\""), "submitted name must be echoed");
}

#[tokio::test]
async fn valid_service_is_created_and_listed_first() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    ServiceRepo::create(
        &app.pool,
        &ServiceInput {
            name: "Consulting".into(),
            description: "Architecture reviews and planning.".into(),
        },
    )
    .await
    .unwrap();

    let response = post_form(&app, "/admin/services", VALID_BODY, Some(&cookie)).await;
    assert_redirect(&response, "/admin/services");

    let services = ServiceRepo::list(&app.pool).await.unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].name, "Web Design");

    let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    assert!(html.contains("Service &quot;Web Design&quot; created successfully."));
    let newest = html.find("<td>Web Design</td>").unwrap();
    let oldest = html.find("<td>Consulting</td>").unwrap();
    assert!(newest < oldest);
}

#[tokio::test]
async fn flash_is_shown_only_once() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    post_form(&app, "/admin/services", VALID_BODY, Some(&cookie)).await;

    let first = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    let second = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    assert!(first.contains("created successfully"));
    assert!(!second.contains("created successfully"));
}

#[tokio::test]
async fn fields_are_trimmed_before_validation() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/admin/services",
        "name=+++A+++&description=Long+enough+description",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/services");

    assert!(ServiceRepo::list(&app.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    let id = ServiceRepo::create(
        &app.pool,
        &ServiceInput {
            name: "Old".into(),
            description: "An outdated description.".into(),
        },
    )
    .await
    .unwrap();

    let response = post_form(
        &app,
        &format!("/admin/services/{id}"),
        VALID_BODY,
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/services");

    let service = ServiceRepo::get(&app.pool, id).await.unwrap().unwrap();
    assert_eq!(service.name, "Web Design");
}

#[tokio::test]
async fn invalid_update_returns_to_the_edit_form() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    let id = ServiceRepo::create(
        &app.pool,
        &ServiceInput {
            name: "Hosting".into(),
            description: "Managed hosting and monitoring.".into(),
        },
    )
    .await
    .unwrap();

    let edit_path = format!("/admin/services/{id}/edit");
    let response = post_form(
        &app,
        &format!("/admin/services/{id}"),
        "name=Hosting&description=tiny",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, &edit_path);

    let response = get(&app, &edit_path, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Description must be at least 10 characters."));
    assert!(html.contains(">tiny</textarea>"));

    let service = ServiceRepo::get(&app.pool, id).await.unwrap().unwrap();
    assert_eq!(service.description, "Managed hosting and monitoring.");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    let id = ServiceRepo::create(
        &app.pool,
        &ServiceInput {
            name: "Audits".into(),
            description: "Security and accessibility audits.".into(),
        },
    )
    .await
    .unwrap();

    let response = post_form(
        &app,
        &format!("/admin/services/{id}/delete"),
        "",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/services");
    assert!(ServiceRepo::get(&app.pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_service_is_reported() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(&app, "/admin/services/999/delete", "", Some(&cookie)).await;
    assert_redirect(&response, "/admin/services");
    let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    assert!(html.contains("Service no longer exists."));

    let response = get(&app, "/admin/services/999/edit", Some(&cookie)).await;
    assert_redirect(&response, "/admin/services");
}

#[tokio::test]
async fn anonymous_post_creates_nothing() {
    let app = spawn_app().await;

    let response = post_form(&app, "/admin/services", VALID_BODY, None).await;

    assert_redirect(&response, "/admin/login");
    assert!(ServiceRepo::list(&app.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_ids_are_reported_as_missing() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    for raw in ["abc", "99999999999999999999"] {
        let response =
            post_form(&app, &format!("/admin/services/{raw}/delete"), "", Some(&cookie)).await;
        assert_redirect(&response, "/admin/services");
        let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
        assert!(html.contains("Service no longer exists."));

        let response =
            post_form(&app, &format!("/admin/services/{raw}"), VALID_BODY, Some(&cookie)).await;
        assert_redirect(&response, "/admin/services");
        let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
        assert!(html.contains("Service no longer exists."));

        let response = get(&app, &format!("/admin/services/{raw}/edit"), Some(&cookie)).await;
        assert_redirect(&response, "/admin/services");
    }
    assert!(ServiceRepo::list(&app.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn store_failure_flashes_a_generic_error_and_echoes_input() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    sqlx::query(
        "CREATE TRIGGER reject_services BEFORE INSERT ON services \
         BEGIN SELECT RAISE(ABORT, 'disk full'); END",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let response = post_form(&app, "/admin/services", VALID_BODY, Some(&cookie)).await;
    assert_redirect(&response, "/admin/services");
    assert!(ServiceRepo::list(&app.pool).await.unwrap().is_empty());

    let html = body_text(get(&app, "/admin/services", Some(&cookie)).await).await;
    assert!(html.contains("Unable to create service. Please try again."));
    assert!(html.contains("value=\"Web Design\""), "submitted name must be echoed");
    assert!(!html.contains("disk full"), "store details stay in the logs");
}
