// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::task_error_report::TaskErrorReport;
use async_trait::async_trait;
use uuid::Uuid;

/// 错误报告仓库特质
#[async_trait]
pub trait TaskErrorReportRepository: Send + Sync {
    /// 保存新的错误报告
    async fn create(&self, report: &TaskErrorReport) -> Result<TaskErrorReport, RepositoryError>;

    /// 某道练习题收到的全部报告，按提交时间升序
    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskErrorReport>, RepositoryError>;
}
