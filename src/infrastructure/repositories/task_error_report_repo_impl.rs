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

use crate::domain::models::task_error_report::TaskErrorReport;
use crate::domain::repositories::task_error_report_repository::TaskErrorReportRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::task_error_report as report_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 练习题错误报告仓库实现
#[derive(Clone)]
pub struct TaskErrorReportRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TaskErrorReportRepositoryImpl {
    /// 创建新的错误报告仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<report_entity::Model> for TaskErrorReport {
    fn from(model: report_entity::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            error_kind: model.error_kind.into(),
            text: model.text,
            code: model.code,
            created_at: model.created_at.into(),
        }
    }
}

#[async_trait]
impl TaskErrorReportRepository for TaskErrorReportRepositoryImpl {
    async fn create(&self, report: &TaskErrorReport) -> Result<TaskErrorReport, RepositoryError> {
        let active_model = report_entity::ActiveModel {
            id: Set(report.id),
            task_id: Set(report.task_id),
            error_kind: Set(report.error_kind.into()),
            text: Set(report.text.clone()),
            code: Set(report.code.clone()),
            created_at: Set(report.created_at.into()),
        };

        let result = active_model.insert(self.db.as_ref()).await?;
        Ok(result.into())
    }

    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskErrorReport>, RepositoryError> {
        let models = report_entity::Entity::find()
            .filter(report_entity::Column::TaskId.eq(task_id))
            .order_by_asc(report_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
