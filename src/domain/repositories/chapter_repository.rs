// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::course::Chapter;
use async_trait::async_trait;
use uuid::Uuid;

/// 章节仓库特质
#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// 根据ID查找章节
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chapter>, RepositoryError>;

    /// 在指定课程内根据URL路径片段查找章节
    async fn find_by_url_component(
        &self,
        course_id: Uuid,
        component: &str,
    ) -> Result<Option<Chapter>, RepositoryError>;

    /// 按排序索引升序列出所有章节
    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Chapter>, RepositoryError>;
}
