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

use crate::domain::models::course::Task;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 练习题仓库实现
///
/// 基于SeaORM实现的练习题数据访问层
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的练习题仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<task_entity::Model> for Task {
    fn from(model: task_entity::Model) -> Self {
        Self {
            id: model.id,
            lesson_id: model.lesson_id,
            link_text: model.link_text,
            url_path_component: model.url_path_component,
            heading: model.heading,
            condition: model.condition,
            initial_code: model.initial_code,
            code_to_append: model.code_to_append,
            check_rules: model.check_rules,
            expected_output: model.expected_output,
            sort_index: model.sort_index,
            created_at: model.created_at.into(),
            last_modified: model.last_modified.into(),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_lesson_order_by_sort_index(
        &self,
        lesson_id: Uuid,
    ) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::LessonId.eq(lesson_id))
            .order_by_asc(task_entity::Column::SortIndex)
            .order_by_asc(task_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .order_by_asc(task_entity::Column::SortIndex)
            .order_by_asc(task_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
