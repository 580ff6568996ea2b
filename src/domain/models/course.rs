// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::meta::Meta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 课程实体
///
/// 目录树的根节点，拥有若干章节
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// 课程唯一标识符
    pub id: Uuid,
    /// 链接文本，用于导航和列表
    pub link_text: String,
    /// URL路径片段，全局唯一
    pub url_path_component: String,
    /// SEO元信息
    pub meta: Meta,
    /// 页面主标题
    pub heading: String,
    /// 课程描述（HTML）
    pub description: String,
    /// 排序索引，升序展示
    pub sort_index: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub last_modified: DateTime<Utc>,
}

/// 章节实体
///
/// 隶属于唯一的课程，拥有若干课时
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节唯一标识符
    pub id: Uuid,
    /// 所属课程ID
    pub course_id: Uuid,
    /// 链接文本
    pub link_text: String,
    /// URL路径片段，在同一课程内唯一
    pub url_path_component: String,
    /// SEO元信息
    pub meta: Meta,
    /// 页面主标题
    pub heading: String,
    /// 章节描述（HTML）
    pub description: String,
    /// 排序索引
    pub sort_index: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub last_modified: DateTime<Utc>,
}

/// 课时实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// 课时唯一标识符
    pub id: Uuid,
    /// 所属章节ID
    pub chapter_id: Uuid,
    /// 链接文本
    pub link_text: String,
    /// URL路径片段，在同一章节内唯一
    pub url_path_component: String,
    /// SEO元信息
    pub meta: Meta,
    /// 页面主标题
    pub heading: String,
    /// 正文（HTML）
    pub body_markup: String,
    /// 排序索引
    pub sort_index: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub last_modified: DateTime<Utc>,
}

/// 练习题实体
///
/// 初始代码、追加代码、检查规则和期望输出由外部判题流程使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub link_text: String,
    /// 页面内锚点，在同一课时内唯一
    pub url_path_component: String,
    pub heading: String,
    /// 题目条件（HTML）
    pub condition: String,
    pub initial_code: String,
    pub code_to_append: String,
    pub check_rules: String,
    pub expected_output: String,
    pub sort_index: i32,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}
