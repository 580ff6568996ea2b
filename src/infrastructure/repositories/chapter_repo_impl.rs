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

use crate::domain::models::course::Chapter;
use crate::domain::models::meta::Meta;
use crate::domain::repositories::chapter_repository::ChapterRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::chapter as chapter_entity;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 章节仓库实现
#[derive(Clone)]
pub struct ChapterRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ChapterRepositoryImpl {
    /// 创建新的章节仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<chapter_entity::Model> for Chapter {
    fn from(model: chapter_entity::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            link_text: model.link_text,
            url_path_component: model.url_path_component,
            meta: Meta {
                title: model.meta_title,
                description: model.meta_description,
                keywords: model.meta_keywords,
            },
            heading: model.heading,
            description: model.description,
            sort_index: model.sort_index,
            created_at: model.created_at.into(),
            last_modified: model.last_modified.into(),
        }
    }
}

#[async_trait]
impl ChapterRepository for ChapterRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chapter>, RepositoryError> {
        let model = chapter_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_url_component(
        &self,
        course_id: Uuid,
        component: &str,
    ) -> Result<Option<Chapter>, RepositoryError> {
        let model = chapter_entity::Entity::find()
            .filter(chapter_entity::Column::CourseId.eq(course_id))
            .filter(chapter_entity::Column::UrlPathComponent.eq(component))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Chapter>, RepositoryError> {
        let models = chapter_entity::Entity::find()
            .order_by_asc(chapter_entity::Column::SortIndex)
            .order_by_asc(chapter_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
