// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 每个仓库包装一张内容表，提供按ID查找、按URL路径片段查找以及按排序索引排列的列表查询。
///
/// 包含的仓库接口：
/// - 页面仓库（page_repository）
/// - 文章仓库（article_repository）
/// - 课程、章节、课时、练习题仓库（course/chapter/lesson/task_repository）
/// - 错误报告仓库（task_error_report_repository）：只写为主的访客提交
///
/// 查询失败直接以 `RepositoryError` 向上传播，不做重试。
pub mod article_repository;
pub mod chapter_repository;
pub mod code_review_repository;
pub mod course_repository;
pub mod lesson_repository;
pub mod page_repository;
pub mod task_error_report_repository;
pub mod task_repository;

use sea_orm::DbErr;
use std::sync::Arc;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 站点内容仓库集合
///
/// 路由解析和课程树缓存共用同一组仓库句柄
#[derive(Clone)]
pub struct ContentRepositories {
    pub pages: Arc<dyn page_repository::PageRepository>,
    pub articles: Arc<dyn article_repository::ArticleRepository>,
    pub courses: Arc<dyn course_repository::CourseRepository>,
    pub chapters: Arc<dyn chapter_repository::ChapterRepository>,
    pub lessons: Arc<dyn lesson_repository::LessonRepository>,
    pub tasks: Arc<dyn task_repository::TaskRepository>,
    pub task_error_reports: Arc<dyn task_error_report_repository::TaskErrorReportRepository>,
    pub code_reviews: Arc<dyn code_review_repository::CodeReviewRepository>,
}
