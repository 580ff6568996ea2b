// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::course::Lesson;
use async_trait::async_trait;
use uuid::Uuid;

/// 课时仓库特质
///
/// 课时的路径解析完全通过课程树完成，这里只需要按ID读取正文
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// 根据ID查找课时
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lesson>, RepositoryError>;

    /// 按排序索引升序列出所有课时
    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Lesson>, RepositoryError>;
}
