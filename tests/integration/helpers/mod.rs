// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod seed;

use axum_test::TestServer;
use javanese::app::build_app;
use javanese::config::settings::Settings;
use javanese::infrastructure::database::connection;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub settings: Settings,
}

/// 单连接的内存SQLite数据库，已执行全部迁移
pub async fn test_db() -> Arc<DatabaseConnection> {
    let settings = test_settings();
    let db = connection::create_pool(&settings.database)
        .await
        .expect("Failed to open in-memory database");
    connection::run_migrations(&db)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub fn test_settings() -> Settings {
    let dir = tempfile::tempdir().expect("Failed to create config dir");
    let mut settings = Settings::load_from(dir.path()).expect("Failed to load settings");
    settings.database.url = Some("sqlite::memory:".to_string());
    // 内存数据库只存在于单个连接中
    settings.database.max_connections = Some(1);
    settings.database.min_connections = Some(1);
    settings.site.url = "https://javanese.online".to_string();
    settings
}

/// 在已填充数据的数据库上构建应用
pub async fn create_test_app(db: Arc<DatabaseConnection>) -> TestApp {
    create_test_app_with(db, |_| {}).await
}

pub async fn create_test_app_with(
    db: Arc<DatabaseConnection>,
    configure: impl FnOnce(&mut Settings),
) -> TestApp {
    let mut settings = test_settings();
    configure(&mut settings);

    let app = build_app(db.clone(), &settings)
        .await
        .expect("Failed to build app");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        db,
        settings,
    }
}
