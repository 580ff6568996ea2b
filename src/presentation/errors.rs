// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::infrastructure::admin::AdminError;
use crate::utils::errors::SiteError;

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match &self {
            SiteError::NotFound { .. } => StatusCode::NOT_FOUND,
            SiteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SiteError::Repository(e) => {
                error!("Repository failure while serving a page: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // 404和500的正文由错误页面中间件替换
        (status, self.to_string()).into_response()
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AdminError::Unauthorized => StatusCode::UNAUTHORIZED,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            // 唯一索引或外键约束冲突属于输入错误
            AdminError::Database(e) if e.sql_err().is_some() => StatusCode::BAD_REQUEST,
            AdminError::Database(e) => {
                error!("Admin database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AdminError::Internal(e) => {
                error!("Admin internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
