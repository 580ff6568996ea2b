// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::routing::{get, post};
use axum::{middleware, Extension, Router};
use std::sync::Arc;

use crate::infrastructure::admin::AdminPanel;
use crate::infrastructure::observability::hits::HitCounter;
use crate::presentation::handlers::admin_handler;
use crate::presentation::middleware::auth_middleware::{admin_auth_middleware, AdminAuthState};

/// 管理面板路由
///
/// 挂载在配置的管理路径之下
pub fn admin_routes(panel: Arc<AdminPanel>, hits: Arc<HitCounter>, auth: AdminAuthState) -> Router {
    Router::new()
        .route("/hits", get(admin_handler::page_hits))
        .route("/crud", get(admin_handler::list_tables))
        .route(
            "/crud/{table}",
            get(admin_handler::list_rows).post(admin_handler::create_row),
        )
        .route(
            "/crud/{table}/{id}",
            get(admin_handler::get_row)
                .put(admin_handler::update_row)
                .delete(admin_handler::delete_row),
        )
        .route(
            "/crud/{table}/{id}/move/{direction}",
            post(admin_handler::move_row),
        )
        .layer(Extension(panel))
        .layer(Extension(hits))
        .layer(middleware::from_fn_with_state(auth, admin_auth_middleware))
}
