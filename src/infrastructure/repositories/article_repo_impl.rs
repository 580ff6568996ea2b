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

use crate::domain::models::article::{Article, ArticleBasicInfo, VkPostInfo};
use crate::domain::models::meta::Meta;
use crate::domain::repositories::article_repository::ArticleRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::article as article_entity;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

/// 文章仓库实现
///
/// 列表查询只返回已发布的文章；按路径查找不区分发布状态
#[derive(Clone)]
pub struct ArticleRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ArticleRepositoryImpl {
    /// 创建新的文章仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<article_entity::Model> for Article {
    fn from(model: article_entity::Model) -> Self {
        Self {
            vk_post: VkPostInfo::from_columns(&model.vk_post_id, &model.vk_post_hash),
            id: model.id,
            link_text: model.link_text,
            url_path_component: model.url_path_component,
            meta: Meta {
                title: model.meta_title,
                description: model.meta_description,
                keywords: model.meta_keywords,
            },
            heading: model.heading,
            body_markup: model.body_markup,
            sort_index: model.sort_index,
            published: model.published,
            created_at: model.created_at.into(),
            last_modified: model.last_modified.into(),
        }
    }
}

/// 精简信息投影，避免列表查询读取正文
#[derive(Debug, FromQueryResult)]
struct BasicInfoRow {
    id: Uuid,
    link_text: String,
    url_path_component: String,
    last_modified: sea_orm::prelude::ChronoDateTimeWithTimeZone,
}

impl From<BasicInfoRow> for ArticleBasicInfo {
    fn from(row: BasicInfoRow) -> Self {
        Self {
            id: row.id,
            link_text: row.link_text,
            url_path_component: row.url_path_component,
            last_modified: row.last_modified.into(),
        }
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepositoryError> {
        let model = article_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Article>, RepositoryError> {
        let model = article_entity::Entity::find()
            .filter(article_entity::Column::UrlPathComponent.eq(component))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_published_order_by_sort_index(
        &self,
    ) -> Result<Vec<Article>, RepositoryError> {
        let models = article_entity::Entity::find()
            .filter(article_entity::Column::Published.eq(true))
            .order_by_asc(article_entity::Column::SortIndex)
            .order_by_asc(article_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all_basic_published_order_by_sort_index(
        &self,
    ) -> Result<Vec<ArticleBasicInfo>, RepositoryError> {
        let rows = article_entity::Entity::find()
            .select_only()
            .column(article_entity::Column::Id)
            .column(article_entity::Column::LinkText)
            .column(article_entity::Column::UrlPathComponent)
            .column(article_entity::Column::LastModified)
            .filter(article_entity::Column::Published.eq(true))
            .order_by_asc(article_entity::Column::SortIndex)
            .order_by_asc(article_entity::Column::Id)
            .into_model::<BasicInfoRow>()
            .all(self.db.as_ref())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
