// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::observability::hits::HitCounter;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 访问计数中间件
///
/// 只统计已匹配路由的成功响应，404和错误不计入
pub async fn hit_counter_middleware(
    State(hits): State<Arc<HitCounter>>,
    req: Request,
    next: Next,
) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string());
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if let Some(route) = route {
        if response.status().is_success() {
            hits.record(&route, &path);
        }
    }
    response
}
