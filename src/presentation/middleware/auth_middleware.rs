// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::admin::AdminError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// 管理面板认证状态
#[derive(Clone, Default)]
pub struct AdminAuthState {
    /// 访问令牌，为空时不做认证
    pub token: Option<Arc<str>>,
}

impl AdminAuthState {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }
}

/// 管理面板认证中间件
///
/// 配置了令牌时要求 `Authorization: Bearer <token>`
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn admin_auth_middleware(
    State(state): State<AdminAuthState>,
    req: Request,
    next: Next,
) -> Result<Response, AdminError> {
    let Some(expected) = state.token.as_deref() else {
        return Ok(next.run(req).await);
    };

    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if !provided.is_some_and(|token| token_matches(token, expected)) {
        debug!("Rejected admin request to {}", req.uri().path());
        return Err(AdminError::Unauthorized);
    }

    Ok(next.run(req).await)
}

/// 比较耗时只取决于长度，与令牌内容无关
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
#[path = "auth_middleware_test.rs"]
mod tests;
