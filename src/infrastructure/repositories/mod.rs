// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于SeaORM的具体实现
pub mod article_repo_impl;
pub mod chapter_repo_impl;
pub mod code_review_repo_impl;
pub mod course_repo_impl;
pub mod lesson_repo_impl;
pub mod page_repo_impl;
pub mod task_error_report_repo_impl;
pub mod task_repo_impl;

use crate::domain::repositories::ContentRepositories;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 基于同一连接池创建全部内容仓库
pub fn content_repositories(db: Arc<DatabaseConnection>) -> ContentRepositories {
    ContentRepositories {
        pages: Arc::new(page_repo_impl::PageRepositoryImpl::new(db.clone())),
        articles: Arc::new(article_repo_impl::ArticleRepositoryImpl::new(db.clone())),
        courses: Arc::new(course_repo_impl::CourseRepositoryImpl::new(db.clone())),
        chapters: Arc::new(chapter_repo_impl::ChapterRepositoryImpl::new(db.clone())),
        lessons: Arc::new(lesson_repo_impl::LessonRepositoryImpl::new(db.clone())),
        tasks: Arc::new(task_repo_impl::TaskRepositoryImpl::new(db.clone())),
        task_error_reports: Arc::new(
            task_error_report_repo_impl::TaskErrorReportRepositoryImpl::new(db.clone()),
        ),
        code_reviews: Arc::new(code_review_repo_impl::CodeReviewRepositoryImpl::new(db)),
    }
}
