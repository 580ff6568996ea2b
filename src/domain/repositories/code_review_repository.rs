// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::code_review::CodeReview;
use async_trait::async_trait;
use uuid::Uuid;

/// 代码审阅仓库特质
#[async_trait]
pub trait CodeReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CodeReview>, RepositoryError>;

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<CodeReview>, RepositoryError>;

    /// 按创建时间倒序列出
    async fn find_all_newest_first(&self) -> Result<Vec<CodeReview>, RepositoryError>;
}
