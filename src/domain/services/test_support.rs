// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::{Article, ArticleBasicInfo};
use crate::domain::models::code_review::CodeReview;
use crate::domain::models::course::{Chapter, Course, Lesson, Task};
use crate::domain::models::meta::Meta;
use crate::domain::models::page::{Page, PageMagic};
use crate::domain::models::task_error_report::TaskErrorReport;
use crate::domain::repositories::article_repository::ArticleRepository;
use crate::domain::repositories::chapter_repository::ChapterRepository;
use crate::domain::repositories::code_review_repository::CodeReviewRepository;
use crate::domain::repositories::course_repository::CourseRepository;
use crate::domain::repositories::lesson_repository::LessonRepository;
use crate::domain::repositories::page_repository::PageRepository;
use crate::domain::repositories::task_error_report_repository::TaskErrorReportRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::repositories::{ContentRepositories, RepositoryError};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use sea_orm::DbErr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use uuid::Uuid;

/// 内存中的站点内容，实现全部内容仓库接口
#[derive(Default)]
pub struct InMemoryContent {
    pub pages: Mutex<Vec<Page>>,
    pub articles: Mutex<Vec<Article>>,
    pub courses: Mutex<Vec<Course>>,
    pub chapters: Mutex<Vec<Chapter>>,
    pub lessons: Mutex<Vec<Lesson>>,
    pub tasks: Mutex<Vec<Task>>,
    pub reports: Mutex<Vec<TaskErrorReport>>,
    pub code_reviews: Mutex<Vec<CodeReview>>,
    /// 置位后所有查询返回数据库错误
    pub failing: AtomicBool,
    /// 下一次课程列表查询读取数据后等待该通知再返回
    pub course_listing_stall: Mutex<Option<Arc<Notify>>>,
}

impl InMemoryContent {
    pub fn repositories(self: &Arc<Self>) -> ContentRepositories {
        ContentRepositories {
            pages: self.clone(),
            articles: self.clone(),
            courses: self.clone(),
            chapters: self.clone(),
            lessons: self.clone(),
            tasks: self.clone(),
            task_error_reports: self.clone(),
            code_reviews: self.clone(),
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

fn sorted<T: Clone>(items: &[T], key: impl Fn(&T) -> i32) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by_key(key);
    items
}

pub fn page(slug: &str, magic: PageMagic) -> Page {
    Page {
        id: Uuid::new_v4(),
        url_path_component: slug.to_string(),
        link_text: slug.to_uppercase(),
        meta: Meta::default(),
        heading: slug.to_string(),
        body_markup: String::new(),
        head_markup: String::new(),
        before_body_end_markup: String::new(),
        magic,
        sort_index: 0,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

pub fn article(slug: &str, published: bool) -> Article {
    Article {
        id: Uuid::new_v4(),
        link_text: slug.to_uppercase(),
        url_path_component: slug.to_string(),
        meta: Meta::default(),
        heading: slug.to_string(),
        body_markup: String::new(),
        sort_index: 0,
        published,
        vk_post: None,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

pub fn course(slug: &str, sort_index: i32) -> Course {
    Course {
        id: Uuid::new_v4(),
        link_text: slug.to_uppercase(),
        url_path_component: slug.to_string(),
        meta: Meta::default(),
        heading: slug.to_string(),
        description: String::new(),
        sort_index,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

pub fn chapter(course_id: Uuid, slug: &str, sort_index: i32) -> Chapter {
    Chapter {
        id: Uuid::new_v4(),
        course_id,
        link_text: slug.to_uppercase(),
        url_path_component: slug.to_string(),
        meta: Meta::default(),
        heading: slug.to_string(),
        description: String::new(),
        sort_index,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

pub fn lesson(chapter_id: Uuid, slug: &str, sort_index: i32) -> Lesson {
    Lesson {
        id: Uuid::new_v4(),
        chapter_id,
        link_text: slug.to_uppercase(),
        url_path_component: slug.to_string(),
        meta: Meta::default(),
        heading: slug.to_string(),
        body_markup: String::new(),
        sort_index,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

pub fn task(lesson_id: Uuid, slug: &str, sort_index: i32) -> Task {
    Task {
        id: Uuid::new_v4(),
        lesson_id,
        link_text: slug.to_uppercase(),
        url_path_component: slug.to_string(),
        heading: slug.to_string(),
        condition: String::new(),
        initial_code: String::new(),
        code_to_append: String::new(),
        check_rules: String::new(),
        expected_output: String::new(),
        sort_index,
        created_at: Utc::now(),
        last_modified: Utc::now(),
    }
}

#[async_trait]
impl PageRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, RepositoryError> {
        self.check()?;
        Ok(self.pages.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Page>, RepositoryError> {
        self.check()?;
        Ok(self
            .pages
            .lock()
            .iter()
            .find(|p| p.url_path_component == component)
            .cloned())
    }

    async fn find_by_magic(&self, magic: PageMagic) -> Result<Option<Page>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.pages.lock(), |p| p.sort_index)
            .into_iter()
            .find(|p| p.magic == magic))
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Page>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.pages.lock(), |p| p.sort_index))
    }
}

#[async_trait]
impl ArticleRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepositoryError> {
        self.check()?;
        Ok(self.articles.lock().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Article>, RepositoryError> {
        self.check()?;
        Ok(self
            .articles
            .lock()
            .iter()
            .find(|a| a.url_path_component == component)
            .cloned())
    }

    async fn find_all_published_order_by_sort_index(
        &self,
    ) -> Result<Vec<Article>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.articles.lock(), |a| a.sort_index)
            .into_iter()
            .filter(|a| a.published)
            .collect())
    }

    async fn find_all_basic_published_order_by_sort_index(
        &self,
    ) -> Result<Vec<ArticleBasicInfo>, RepositoryError> {
        Ok(self
            .find_all_published_order_by_sort_index()
            .await?
            .iter()
            .map(Article::basic_info)
            .collect())
    }
}

#[async_trait]
impl CourseRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError> {
        self.check()?;
        Ok(self.courses.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<Course>, RepositoryError> {
        self.check()?;
        Ok(self
            .courses
            .lock()
            .iter()
            .find(|c| c.url_path_component == component)
            .cloned())
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Course>, RepositoryError> {
        self.check()?;
        let courses = sorted(&self.courses.lock(), |c| c.sort_index);
        let stall = self.course_listing_stall.lock().take();
        if let Some(release) = stall {
            release.notified().await;
        }
        Ok(courses)
    }
}

#[async_trait]
impl ChapterRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chapter>, RepositoryError> {
        self.check()?;
        Ok(self.chapters.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_url_component(
        &self,
        course_id: Uuid,
        component: &str,
    ) -> Result<Option<Chapter>, RepositoryError> {
        self.check()?;
        Ok(self
            .chapters
            .lock()
            .iter()
            .find(|c| c.course_id == course_id && c.url_path_component == component)
            .cloned())
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Chapter>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.chapters.lock(), |c| c.sort_index))
    }
}

#[async_trait]
impl LessonRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lesson>, RepositoryError> {
        self.check()?;
        Ok(self.lessons.lock().iter().find(|l| l.id == id).cloned())
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Lesson>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.lessons.lock(), |l| l.sort_index))
    }
}

#[async_trait]
impl TaskRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        self.check()?;
        Ok(self.tasks.lock().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_lesson_order_by_sort_index(
        &self,
        lesson_id: Uuid,
    ) -> Result<Vec<Task>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.tasks.lock(), |t| t.sort_index)
            .into_iter()
            .filter(|t| t.lesson_id == lesson_id)
            .collect())
    }

    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Task>, RepositoryError> {
        self.check()?;
        Ok(sorted(&self.tasks.lock(), |t| t.sort_index))
    }
}

#[async_trait]
impl TaskErrorReportRepository for InMemoryContent {
    async fn create(&self, report: &TaskErrorReport) -> Result<TaskErrorReport, RepositoryError> {
        self.check()?;
        self.reports.lock().push(report.clone());
        Ok(report.clone())
    }

    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskErrorReport>, RepositoryError> {
        self.check()?;
        Ok(self
            .reports
            .lock()
            .iter()
            .filter(|r| r.task_id == task_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CodeReviewRepository for InMemoryContent {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CodeReview>, RepositoryError> {
        self.check()?;
        Ok(self.code_reviews.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_url_component(
        &self,
        component: &str,
    ) -> Result<Option<CodeReview>, RepositoryError> {
        self.check()?;
        Ok(self
            .code_reviews
            .lock()
            .iter()
            .find(|r| r.url_path_component == component)
            .cloned())
    }

    async fn find_all_newest_first(&self) -> Result<Vec<CodeReview>, RepositoryError> {
        self.check()?;
        let mut reviews = self.code_reviews.lock().clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}
