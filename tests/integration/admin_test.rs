// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with, seed, test_db};
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn lesson_json(chapter_id: Uuid, slug: &str) -> Value {
    json!({
        "chapter_id": chapter_id,
        "link_text": format!("{} link", slug),
        "url_path_component": slug,
        "meta_title": format!("{} title", slug),
        "meta_description": "",
        "meta_keywords": "",
        "heading": format!("{} heading", slug),
        "body_markup": "<p>new lesson</p>",
    })
}

#[tokio::test]
async fn test_lists_tables() {
    let app = create_test_app(test_db().await).await;

    let response = app.server.get("/admin/crud").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let tables: Vec<&str> = body["tables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(tables.len(), 9);
    for table in ["course", "chapter", "lesson", "task", "page", "article"] {
        assert!(tables.contains(&table), "{}", table);
    }
    assert!(tables.contains(&"task_error_report"));
    assert!(tables.contains(&"code_review"));
}

#[tokio::test]
async fn test_inserted_lesson_is_served_after_tree_refresh() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;

    app.server
        .get("/python/basics/intro/")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = app
        .server
        .post("/admin/crud/lesson")
        .json(&lesson_json(site.basics, "intro"))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert_eq!(created["sort_index"], 0);

    let page = app.server.get("/python/basics/intro/").await;
    page.assert_status_ok();
    assert!(page.text().contains("<p>new lesson</p>"));
}

#[tokio::test]
async fn test_sort_index_follows_siblings() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;

    let created: Value = app
        .server
        .post("/admin/crud/lesson")
        .json(&lesson_json(site.loops, "do-while"))
        .await
        .json();

    // while=1, for=2
    assert_eq!(created["sort_index"], 3);
}

#[tokio::test]
async fn test_get_update_delete_row() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;
    let url = format!("/admin/crud/chapter/{}", site.loops);

    let row: Value = app.server.get(&url).await.json();
    assert_eq!(row["url_path_component"], "loops");
    assert_eq!(row["sort_index"], 2);

    let response = app
        .server
        .put(&url)
        .json(&json!({
            "id": Uuid::new_v4(),
            "heading": "Cycles",
            "sort_index": 99,
        }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["id"], site.loops.to_string());
    assert_eq!(updated["heading"], "Cycles");
    assert_eq!(updated["sort_index"], 2);
    assert_eq!(updated["created_at"], row["created_at"]);

    let html = app.server.get("/python/loops/").await.text();
    assert!(html.contains("<h1>Cycles</h1>"));

    let functions_url = format!("/admin/crud/chapter/{}", site.functions);
    app.server
        .delete(&functions_url)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get(&functions_url)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&functions_url)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // 删除后课程树不再指向该章节
    let html = app.server.get("/python/loops/").await.text();
    assert!(!html.contains("/python/functions/"));
}

#[tokio::test]
async fn test_move_swaps_with_neighbour() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;

    let moved: Value = app
        .server
        .post(&format!("/admin/crud/chapter/{}/move/up", site.loops))
        .await
        .json();
    assert_eq!(moved["sort_index"], 1);

    let basics: Value = app
        .server
        .get(&format!("/admin/crud/chapter/{}", site.basics))
        .await
        .json();
    assert_eq!(basics["sort_index"], 2);

    let html = app.server.get("/python/loops/").await.text();
    assert!(!html.contains(r#"rel="prev""#));
    assert!(html.contains(r#"rel="next" href="/python/basics/""#));

    // 已在首位
    let unchanged: Value = app
        .server
        .post(&format!("/admin/crud/chapter/{}/move/up", site.loops))
        .await
        .json();
    assert_eq!(unchanged["sort_index"], 1);

    // 只与同一课程下的章节交换
    let last: Value = app
        .server
        .post(&format!("/admin/crud/chapter/{}/move/down", site.functions))
        .await
        .json();
    assert_eq!(last["sort_index"], 3);
}

#[tokio::test]
async fn test_move_reorders_equal_sort_indexes() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let a = seed::lesson(&db, site.basics, "alpha", 5).await;
    let b = seed::lesson(&db, site.basics, "beta", 5).await;
    // 序号相同按 id 排序
    let ((first, first_slug), (second, second_slug)) = if a < b {
        ((a, "alpha"), (b, "beta"))
    } else {
        ((b, "beta"), (a, "alpha"))
    };
    let app = create_test_app(db).await;

    let html = app.server.get(&format!("/python/basics/{}/", first_slug)).await.text();
    assert!(html.contains(&format!(r#"rel="next" href="/python/basics/{}/""#, second_slug)));

    let moved: Value = app
        .server
        .post(&format!("/admin/crud/lesson/{}/move/up", second))
        .await
        .json();
    let other: Value = app
        .server
        .get(&format!("/admin/crud/lesson/{}", first))
        .await
        .json();
    assert!(moved["sort_index"].as_i64() < other["sort_index"].as_i64());

    let html = app.server.get(&format!("/python/basics/{}/", second_slug)).await.text();
    assert!(!html.contains(r#"rel="prev""#));
    assert!(html.contains(&format!(r#"rel="next" href="/python/basics/{}/""#, first_slug)));

    // 再向下移动恢复原顺序
    let moved: Value = app
        .server
        .post(&format!("/admin/crud/lesson/{}/move/down", second))
        .await
        .json();
    let other: Value = app
        .server
        .get(&format!("/admin/crud/lesson/{}", first))
        .await
        .json();
    assert!(moved["sort_index"].as_i64() > other["sort_index"].as_i64());
}

#[tokio::test]
async fn test_bad_requests() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;

    app.server
        .post(&format!("/admin/crud/chapter/{}/move/sideways", site.loops))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .post("/admin/crud/lesson")
        .json(&json!({ "heading": "incomplete" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // 同一章节下的路径片段重复
    app.server
        .post("/admin/crud/lesson")
        .json(&lesson_json(site.loops, "while"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .get("/admin/crud/webhook")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_token_is_required_when_configured() {
    let db = test_db().await;
    let app = create_test_app_with(db, |settings| {
        settings.admin.token = Some("secret".to_string());
    })
    .await;

    let response = app.server.get("/admin/crud").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    app.server
        .get("/admin/crud")
        .authorization_bearer("wrong")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .get("/admin/crud")
        .authorization_bearer("secret")
        .await
        .assert_status_ok();

    // 站点页面不受令牌影响
    app.server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_page_hits_count_successful_site_responses() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    app.server.get("/python/").await.assert_status_ok();
    app.server.get("/python/").await.assert_status_ok();
    app.server.get("/python/loops/").await.assert_status_ok();
    app.server
        .get("/python/nope/")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get("/a/b/c/d/")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = app.server.get("/admin/hits").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(
        body["pages"],
        json!([
            { "path": "/python/", "hits": 2 },
            { "path": "/python/loops/", "hits": 1 },
        ])
    );
}

#[tokio::test]
async fn test_page_hits_require_token() {
    let app = create_test_app_with(test_db().await, |settings| {
        settings.admin.token = Some("secret".to_string());
    })
    .await;

    app.server
        .get("/admin/hits")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .get("/admin/hits")
        .authorization_bearer("secret")
        .await
        .assert_status_ok();
}
