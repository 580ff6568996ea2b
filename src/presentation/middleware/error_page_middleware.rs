// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::state::SiteState;
use crate::presentation::views::pages;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// 错误页面中间件
///
/// 公开站点上任何404（包括未匹配的路由）和500响应都替换为本地化的HTML错误页面，状态码保持不变
pub async fn error_page_middleware(
    State(state): State<Arc<SiteState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    let Some((title_key, text_key)) = message_keys(response.status()) else {
        return response;
    };

    let messages = &state.view.messages;
    let html = pages::error_page(
        &state.view,
        messages.get(title_key),
        messages.get(text_key),
        &path,
    );
    (response.status(), Html(html)).into_response()
}

/// 需要替换为错误页面的状态码及其标题、正文文案键
///
/// 400等其余状态保留处理器给出的原始响应体
fn message_keys(status: StatusCode) -> Option<(&'static str, &'static str)> {
    match status {
        StatusCode::NOT_FOUND => Some(("not_found_title", "not_found_text")),
        StatusCode::INTERNAL_SERVER_ERROR => Some(("server_error_title", "server_error_text")),
        _ => None,
    }
}
