// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod admin;

use crate::config::settings::Settings;
use crate::infrastructure::admin::AdminPanel;
use crate::infrastructure::observability::hits::HitCounter;
use crate::presentation::handlers::{content_handler, rss_handler, task_report_handler};
use crate::presentation::middleware::auth_middleware::AdminAuthState;
use crate::presentation::middleware::error_page_middleware::error_page_middleware;
use crate::presentation::middleware::hit_counter_middleware::hit_counter_middleware;
use crate::presentation::state::SiteState;
use crate::utils::errors::SiteError;
use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 创建应用路由
///
/// # 参数
///
/// * `state` - 公开站点共享状态
/// * `panel` - 管理面板
/// * `hits` - 公开页面访问计数
/// * `settings` - 应用配置，提供管理路径、令牌和静态文件目录
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(
    state: Arc<SiteState>,
    panel: Arc<AdminPanel>,
    hits: Arc<HitCounter>,
    settings: &Settings,
) -> Router {
    let site_routes = Router::new()
        .route("/", get(content_handler::root))
        .route("/{first}/", get(content_handler::one_part))
        .route("/{first}/{second}/", get(content_handler::two_parts))
        .route(
            "/{first}/{second}/{third}/",
            get(content_handler::three_parts),
        )
        .route("/articles.rss", get(rss_handler::articles_rss))
        .route(
            "/task/report",
            post(task_report_handler::leave_task_error_report),
        )
        .route_layer(middleware::from_fn_with_state(
            hits.clone(),
            hit_counter_middleware,
        ))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_page_middleware,
        ))
        .layer(Extension(state));

    let admin_path = format!("/{}", settings.admin.route.trim_matches('/'));
    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .nest(
            &admin_path,
            admin::admin_routes(panel, hits, AdminAuthState::new(settings.admin.token.clone())),
        )
        .merge(site_routes);

    if let Some(local_dir) = &settings.static_files.local_dir {
        let exposed = format!(
            "/{}",
            settings.static_files.exposed_path.trim_matches('/')
        );
        info!("Serving static files from {} at {}", local_dir, exposed);
        app = app.nest_service(&exposed, ServeDir::new(local_dir));
    }

    app.layer(TraceLayer::new_for_http())
}

/// 未匹配的路由
async fn not_found(uri: Uri) -> SiteError {
    SiteError::not_found(uri.path())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
