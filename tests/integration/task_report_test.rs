// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, seed, test_db};
use axum::http::StatusCode;
use javanese::infrastructure::database::entities::sea_orm_active_enums::SeaTaskErrorKind;
use javanese::infrastructure::database::entities::task_error_report;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

#[tokio::test]
async fn test_report_is_saved() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db.clone()).await;
    let task_id = site.count_up.to_string();

    let response = app
        .server
        .post("/task/report")
        .form(&[
            ("task_id", task_id.as_str()),
            ("error_kind", "unclear_condition"),
            ("text", "what is counted?"),
            ("code", "i = 0"),
        ])
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let reports = task_error_report::Entity::find()
        .filter(task_error_report::Column::TaskId.eq(site.count_up))
        .all(db.as_ref())
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].error_kind, SeaTaskErrorKind::UnclearCondition);
    assert_eq!(reports[0].text, "what is counted?");
    assert_eq!(reports[0].code, "i = 0");
}

#[tokio::test]
async fn test_text_and_code_are_optional() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db).await;
    let task_id = site.count_up.to_string();

    app.server
        .post("/task/report")
        .form(&[("task_id", task_id.as_str()), ("error_kind", "misprint")])
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_malformed_reports_are_rejected() {
    let db = test_db().await;
    let site = seed::site(&db).await;
    let app = create_test_app(db.clone()).await;
    let task_id = site.count_up.to_string();
    let long_text = "x".repeat(4097);

    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![("task_id", task_id.as_str())],
        vec![("task_id", "not-a-uuid"), ("error_kind", "misprint")],
        vec![("task_id", task_id.as_str()), ("error_kind", "boredom")],
        vec![
            ("task_id", task_id.as_str()),
            ("error_kind", "other"),
            ("text", long_text.as_str()),
        ],
    ];
    for form in cases {
        app.server
            .post("/task/report")
            .form(&form)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let saved = task_error_report::Entity::find().all(db.as_ref()).await.unwrap();
    assert!(saved.is_empty());
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let db = test_db().await;
    seed::site(&db).await;
    let app = create_test_app(db).await;
    let task_id = Uuid::new_v4().to_string();

    app.server
        .post("/task/report")
        .form(&[("task_id", task_id.as_str()), ("error_kind", "wrong_check")])
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
