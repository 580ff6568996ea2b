// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use thiserror::Error;

/// 公开站点的错误类型
#[derive(Error, Debug)]
pub enum SiteError {
    /// 路径没有对应的内容
    #[error("Nothing found at {path}")]
    NotFound { path: String },

    /// 请求参数无效
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SiteError {
    pub fn not_found(path: impl Into<String>) -> Self {
        SiteError::NotFound { path: path.into() }
    }
}
