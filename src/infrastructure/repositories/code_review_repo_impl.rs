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

use crate::domain::models::code_review::CodeReview;
use crate::domain::models::meta::Meta;
use crate::domain::repositories::code_review_repository::CodeReviewRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::code_review as code_review_entity;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 代码审阅仓库实现
#[derive(Clone)]
pub struct CodeReviewRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CodeReviewRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<code_review_entity::Model> for CodeReview {
    fn from(model: code_review_entity::Model) -> Self {
        Self {
            id: model.id,
            url_path_component: model.url_path_component,
            meta: Meta {
                title: model.meta_title,
                description: model.meta_description,
                keywords: model.meta_keywords,
            },
            sender_name: model.sender_name,
            problem_statement: model.problem_statement,
            code: model.code,
            review_markup: model.review_markup,
            created_at: model.created_at.into(),
        }
    }
}

#[async_trait]
impl CodeReviewRepository for CodeReviewRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CodeReview>, RepositoryError> {
        let model = code_review_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<CodeReview>, RepositoryError> {
        let model = code_review_entity::Entity::find()
            .filter(code_review_entity::Column::UrlPathComponent.eq(component))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all_newest_first(&self) -> Result<Vec<CodeReview>, RepositoryError> {
        let models = code_review_entity::Entity::find()
            .order_by_desc(code_review_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
