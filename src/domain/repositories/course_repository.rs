// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::course::Course;
use async_trait::async_trait;
use uuid::Uuid;

/// 课程仓库特质
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// 根据ID查找课程
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError>;

    /// 根据URL路径片段查找课程
    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Course>, RepositoryError>;

    /// 按排序索引升序列出所有课程
    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Course>, RepositoryError>;
}
