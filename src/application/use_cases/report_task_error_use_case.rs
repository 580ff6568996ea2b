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

use crate::{
    application::dto::task_report_request::TaskReportRequestDto,
    domain::{
        models::task_error_report::{TaskErrorKind, TaskErrorReport},
        repositories::{
            task_error_report_repository::TaskErrorReportRepository,
            task_repository::TaskRepository, RepositoryError,
        },
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ReportTaskErrorError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Task {0} not found")]
    TaskNotFound(Uuid),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 访客提交练习题错误报告
pub struct ReportTaskErrorUseCase {
    task_repo: Arc<dyn TaskRepository>,
    report_repo: Arc<dyn TaskErrorReportRepository>,
}

impl ReportTaskErrorUseCase {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        report_repo: Arc<dyn TaskErrorReportRepository>,
    ) -> Self {
        Self {
            task_repo,
            report_repo,
        }
    }

    pub async fn execute(
        &self,
        dto: TaskReportRequestDto,
    ) -> Result<TaskErrorReport, ReportTaskErrorError> {
        dto.validate()
            .map_err(|e| ReportTaskErrorError::ValidationError(e.to_string()))?;

        let task_id = Uuid::parse_str(dto.task_id.trim()).map_err(|_| {
            ReportTaskErrorError::ValidationError(format!("invalid task_id: {}", dto.task_id))
        })?;
        let error_kind: TaskErrorKind = dto.error_kind.parse().map_err(|_| {
            ReportTaskErrorError::ValidationError(format!(
                "invalid error_kind: {}",
                dto.error_kind
            ))
        })?;

        if self.task_repo.find_by_id(task_id).await?.is_none() {
            return Err(ReportTaskErrorError::TaskNotFound(task_id));
        }

        let report = TaskErrorReport::new(task_id, error_kind, dto.text, dto.code);
        let saved = self.report_repo.create(&report).await?;
        info!("Task error report {} saved for task {}", saved.id, task_id);
        Ok(saved)
    }
}
