// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, seed, test_db};
use axum::http::StatusCode;
use javanese::infrastructure::database::entities::sea_orm_active_enums::SeaPageMagic;

#[tokio::test]
async fn test_feed_lists_published_articles() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;

    let response = app.server.get("/articles.rss").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert_eq!(
        content_type.to_str().unwrap(),
        "application/rss+xml; charset=utf-8"
    );
    let xml = response.text();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<title>blog title</title>"));
    assert!(xml.contains("<link>https://javanese.online/blog/</link>"));
    assert!(xml.contains("<link>https://javanese.online/blog/my-post/</link>"));
    assert!(!xml.contains("draft"));
}

#[tokio::test]
async fn test_feed_without_articles_page_is_not_found() {
    let db = test_db().await;
    seed::page(&db, "", SeaPageMagic::Index, 0).await;
    seed::article(&db, "orphan", true, 0).await;
    let app = create_test_app(db).await;

    app.server
        .get("/articles.rss")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
