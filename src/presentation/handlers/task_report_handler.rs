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

use axum::{
    extract::{rejection::FormRejection, Extension},
    http::StatusCode,
    Form,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::task_report_request::TaskReportRequestDto,
        use_cases::report_task_error_use_case::{ReportTaskErrorError, ReportTaskErrorUseCase},
    },
    presentation::state::SiteState,
    utils::errors::SiteError,
};

/// 接收访客提交的练习题错误报告
pub async fn leave_task_error_report(
    Extension(state): Extension<Arc<SiteState>>,
    form: Result<Form<TaskReportRequestDto>, FormRejection>,
) -> Result<StatusCode, SiteError> {
    let Form(dto) = form.map_err(|e| SiteError::BadRequest(e.body_text()))?;

    let use_case = ReportTaskErrorUseCase::new(
        state.repos.tasks.clone(),
        state.repos.task_error_reports.clone(),
    );
    match use_case.execute(dto).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(ReportTaskErrorError::ValidationError(msg)) => Err(SiteError::BadRequest(msg)),
        Err(ReportTaskErrorError::TaskNotFound(id)) => {
            Err(SiteError::not_found(format!("task {}", id)))
        }
        Err(ReportTaskErrorError::Repository(e)) => Err(SiteError::Repository(e)),
    }
}
