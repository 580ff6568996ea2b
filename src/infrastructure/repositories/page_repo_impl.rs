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

use crate::domain::models::meta::Meta;
use crate::domain::models::page::{Page, PageMagic};
use crate::domain::repositories::page_repository::PageRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::page as page_entity;
use crate::infrastructure::database::entities::sea_orm_active_enums::SeaPageMagic;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 页面仓库实现
#[derive(Clone)]
pub struct PageRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl PageRepositoryImpl {
    /// 创建新的页面仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<page_entity::Model> for Page {
    fn from(model: page_entity::Model) -> Self {
        Self {
            id: model.id,
            url_path_component: model.url_path_component,
            link_text: model.link_text,
            meta: Meta {
                title: model.meta_title,
                description: model.meta_description,
                keywords: model.meta_keywords,
            },
            heading: model.heading,
            body_markup: model.body_markup,
            head_markup: model.head_markup,
            before_body_end_markup: model.before_body_end_markup,
            magic: model.magic.into(),
            sort_index: model.sort_index,
            created_at: model.created_at.into(),
            last_modified: model.last_modified.into(),
        }
    }
}

#[async_trait]
impl PageRepository for PageRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, RepositoryError> {
        let model = page_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Page>, RepositoryError> {
        let model = page_entity::Entity::find()
            .filter(page_entity::Column::UrlPathComponent.eq(component))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_magic(&self, magic: PageMagic) -> Result<Option<Page>, RepositoryError> {
        let model = page_entity::Entity::find()
            .filter(page_entity::Column::Magic.eq(SeaPageMagic::from(magic)))
            .order_by_asc(page_entity::Column::SortIndex)
            .order_by_asc(page_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Page>, RepositoryError> {
        let models = page_entity::Entity::find()
            .order_by_asc(page_entity::Column::SortIndex)
            .order_by_asc(page_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
