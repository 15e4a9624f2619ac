//! HTTP-level tests for `/admin/portfolio`.

mod common;

use common::{assert_redirect, body_text, get, login, post_form, spawn_app};
use folio_db::models::portfolio::PortfolioInput;
use folio_db::repositories::PortfolioRepo;

#[tokio::test]
async fn image_without_path_or_http_scheme_is_rejected() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/admin/portfolio",
        "title=Landing+page&description=A+marketing+site+redesign.&image=ftp%3A%2F%2Fhost%2Fa.png",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/portfolio");

    assert!(PortfolioRepo::list(&app.pool).await.unwrap().is_empty());
    let html = body_text(get(&app, "/admin/portfolio", Some(&cookie)).await).await;
    assert!(html.contains("Image URL must be a valid path (starting with /)"));
    assert!(html.contains("value=\"ftp://host/a.png\""));
}

#[tokio::test]
async fn valid_item_with_relative_image_is_created() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/admin/portfolio",
        "title=Landing+page&description=A+marketing+site+redesign.&image=%2Fimages%2Flanding.png",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/portfolio");

    let items = PortfolioRepo::list(&app.pool).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image, "/images/landing.png");

    let html = body_text(get(&app, "/admin/portfolio", Some(&cookie)).await).await;
    assert!(html.contains("Portfolio item &quot;Landing page&quot; created successfully."));
}

#[tokio::test]
async fn update_and_delete_round_trip() {
    let app = spawn_app().await;
    let cookie = login(&app).await;
    let id = PortfolioRepo::create(
        &app.pool,
        &PortfolioInput {
            title: "Shop".into(),
            description: "An online store build.".into(),
            image: "https://cdn.example.com/shop.png".into(),
        },
    )
    .await
    .unwrap();

    let edit = get(&app, &format!("/admin/portfolio/{id}/edit"), Some(&cookie)).await;
    let html = body_text(edit).await;
    assert!(html.contains("value=\"Shop\""));

    let response = post_form(
        &app,
        &format!("/admin/portfolio/{id}"),
        "title=Storefront&description=An+online+store+rebuild.&image=%2Fimg%2Fshop.png",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/portfolio");
    let item = PortfolioRepo::get(&app.pool, id).await.unwrap().unwrap();
    assert_eq!(item.title, "Storefront");
    assert_eq!(item.image, "/img/shop.png");

    let response = post_form(
        &app,
        &format!("/admin/portfolio/{id}/delete"),
        "",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/portfolio");
    assert!(PortfolioRepo::get(&app.pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn updating_a_missing_item_is_reported() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/admin/portfolio/42",
        "title=Ghost&description=Nothing+to+see+here.&image=%2Fghost.png",
        Some(&cookie),
    )
    .await;
    assert_redirect(&response, "/admin/portfolio");

    let html = body_text(get(&app, "/admin/portfolio", Some(&cookie)).await).await;
    assert!(html.contains("Portfolio item no longer exists."));
}
