// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with, seed, test_db};
use axum::http::StatusCode;

#[tokio::test]
async fn test_index_page_lists_courses_and_published_articles() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<a href="/python/">python link</a>"#));
    assert!(html.contains(r#"<a href="/java/">java link</a>"#));
    assert!(html.contains(r#"<a href="/blog/my-post/">my-post link</a>"#));
    assert!(!html.contains("draft link"));
}

#[tokio::test]
async fn test_tree_page_shows_whole_catalog() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    let html = app.server.get("/courses/").await.text();

    assert!(html.contains(r#"<a href="/python/loops/">loops link</a>"#));
    assert!(html.contains(r#"<a href="/java/streams/">streams link</a>"#));
    assert!(html.contains(r#"<a href="/python/loops/while/">while link</a>"#));
    assert!(html.contains(r#"<a href="/python/loops/while/#count-up">count-up link</a>"#));
}

#[tokio::test]
async fn test_chapter_page_has_neighbour_links() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    let response = app.server.get("/python/loops/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>loops heading</h1>"));
    assert!(html.contains(r#"rel="prev" href="/python/basics/""#));
    assert!(html.contains(r#"rel="next" href="/python/functions/""#));
    assert!(html.contains(r#"<a href="/python/">python link</a>"#));
}

#[tokio::test]
async fn test_chapter_of_other_course_is_not_found() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    app.server
        .get("/java/loops/")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_article_page() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    let response = app.server.get("/blog/my-post/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>my-post title</title>"));
    assert!(html.contains("<p>my-post body</p>"));
    assert!(html.contains(r#"<a href="/blog/">blog link</a>"#));
}

#[tokio::test]
async fn test_lesson_page_renders_tasks_and_report_form() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;

    let response = app.server.get("/python/loops/while/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>while heading</h1>"));
    assert!(html.contains(r#"<section class="task" id="count-up">"#));
    assert!(html.contains("print(1 &lt; 2)"));
    assert!(html.contains(&format!(r#"name="task_id" value="{}""#, site.count_up)));
    assert!(html.contains(r#"rel="next" href="/python/loops/for/""#));
    assert!(!html.contains(r#"rel="prev""#));
}

#[tokio::test]
async fn test_unknown_paths_render_error_page() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    for path in ["/unknown/", "/python/nope/", "/python/loops/nope/", "/a/b/c/d/"] {
        let response = app.server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let html = response.text();
        assert!(html.contains("Страница не найдена"), "{}", path);
        assert!(html.contains(&format!("<code>{}</code>", path)), "{}", path);
    }
}

#[tokio::test]
async fn test_empty_database_has_no_index() {
    let app = create_test_app(test_db().await).await;

    app.server.get("/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app(test_db().await).await;

    let health = app.server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.text(), "OK");

    let version = app.server.get("/version").await;
    version.assert_status_ok();
    assert_eq!(version.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_static_files_are_served_when_configured() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    let local_dir = static_dir.path().to_string_lossy().into_owned();

    let app = create_test_app_with(test_db().await, |settings| {
        settings.static_files.local_dir = Some(local_dir);
        settings.static_files.exposed_path = "/assets/".to_string();
    })
    .await;

    let response = app.server.get("/assets/style.css").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "body { margin: 0; }");

    app.server
        .get("/assets/missing.css")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
