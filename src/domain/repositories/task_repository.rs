// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::course::Task;
use async_trait::async_trait;
use uuid::Uuid;

/// 练习题仓库特质
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 根据ID查找练习题
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError>;
    /// 课时下的练习题，按排序索引升序
    async fn find_by_lesson_order_by_sort_index(
        &self,
        lesson_id: Uuid,
    ) -> Result<Vec<Task>, RepositoryError>;
    /// 按排序索引升序列出所有练习题
    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Task>, RepositoryError>;
}
