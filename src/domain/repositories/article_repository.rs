// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::article::{Article, ArticleBasicInfo};
use async_trait::async_trait;
use uuid::Uuid;

/// 文章仓库特质
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// 根据ID查找文章
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepositoryError>;

    /// 根据URL路径片段查找文章
    ///
    /// 不区分发布状态，未发布的文章仍可通过直接链接预览
    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Article>, RepositoryError>;

    /// 已发布文章的完整记录，按排序索引升序
    async fn find_all_published_order_by_sort_index(&self)
        -> Result<Vec<Article>, RepositoryError>;

    /// 已发布文章的精简信息，按排序索引升序
    async fn find_all_basic_published_order_by_sort_index(
        &self,
    ) -> Result<Vec<ArticleBasicInfo>, RepositoryError>;
}
