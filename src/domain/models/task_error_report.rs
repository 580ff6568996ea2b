// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 练习题错误报告
///
/// 由访客提交，只在管理面板中查看
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskErrorReport {
    pub id: Uuid,
    /// 被报告的练习题ID
    pub task_id: Uuid,
    pub error_kind: TaskErrorKind,
    /// 访客的描述
    pub text: String,
    /// 访客提交时编辑器中的代码
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// 错误报告类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskErrorKind {
    /// 题目中的笔误
    Misprint,
    /// 题目条件不清楚
    UnclearCondition,
    /// 检查逻辑有误
    WrongCheck,
    /// 其他
    Other,
}

impl fmt::Display for TaskErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskErrorKind::Misprint => write!(f, "misprint"),
            TaskErrorKind::UnclearCondition => write!(f, "unclear_condition"),
            TaskErrorKind::WrongCheck => write!(f, "wrong_check"),
            TaskErrorKind::Other => write!(f, "other"),
        }
    }
}

impl FromStr for TaskErrorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "misprint" => Ok(TaskErrorKind::Misprint),
            "unclear_condition" => Ok(TaskErrorKind::UnclearCondition),
            "wrong_check" => Ok(TaskErrorKind::WrongCheck),
            "other" => Ok(TaskErrorKind::Other),
            _ => Err(()),
        }
    }
}

impl TaskErrorReport {
    /// 创建新的错误报告，生成ID和时间戳
    pub fn new(task_id: Uuid, error_kind: TaskErrorKind, text: String, code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            error_kind,
            text,
            code,
            created_at: Utc::now(),
        }
    }
}
