// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 练习题错误报告表单
///
/// 字段均以字符串接收，ID和错误类型在用例中解析
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TaskReportRequestDto {
    pub task_id: String,
    pub error_kind: String,
    #[serde(default)]
    #[validate(length(max = 4096))]
    pub text: String,
    #[serde(default)]
    #[validate(length(max = 65536))]
    pub code: String,
}
