// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::meta::Meta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 已发布的代码审阅
///
/// 由管理员根据访客提交的候选整理而成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeReview {
    pub id: Uuid,
    /// URL路径片段，全局唯一
    pub url_path_component: String,
    pub meta: Meta,
    pub sender_name: String,
    pub problem_statement: String,
    pub code: String,
    /// 审阅正文（HTML）
    pub review_markup: String,
    pub created_at: DateTime<Utc>,
}
