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

use crate::domain::models::article::Article;
use crate::domain::models::course::{Chapter, Course, Lesson, Task};
use crate::domain::models::page::{Page, PageMagic};
use crate::domain::models::tree::CourseTree;
use crate::domain::repositories::ContentRepositories;
use crate::domain::services::course_tree_cache::CourseTreeCache;
use crate::utils::errors::SiteError;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 路由解析结果
#[derive(Debug)]
pub enum Resolved {
    /// 一段路径命中的页面
    Page(Page),
    /// 一段路径命中的课程
    Course(Course),
    /// 文章列表页面下的文章
    Article { page: Page, article: Article },
    /// 课程下的章节
    Chapter { course: Course, chapter: Chapter },
    /// 经课程树解析到的课时，附带解析时使用的快照
    Lesson {
        tree: Arc<CourseTree>,
        course_id: Uuid,
        chapter_id: Uuid,
        lesson: Lesson,
        tasks: Vec<Task>,
    },
}

/// 路由解析器
///
/// 按固定顺序依次查询仓库，把一到三段URL路径解析为内容实体。
/// 所有分支都失败时返回携带原始路径的 `SiteError::NotFound`。
#[derive(Clone)]
pub struct RouteResolver {
    repos: ContentRepositories,
    tree: Arc<CourseTreeCache>,
}

impl RouteResolver {
    /// 创建新的路由解析器
    pub fn new(repos: ContentRepositories, tree: Arc<CourseTreeCache>) -> Self {
        Self { repos, tree }
    }

    /// 解析一段路径：先页面，后课程
    ///
    /// 根路径 `/` 对应空片段
    pub async fn resolve_one(&self, first: &str) -> Result<Resolved, SiteError> {
        if let Some(page) = self.repos.pages.find_by_url_component(first).await? {
            debug!("'{}' resolved to page {}", first, page.id);
            return Ok(Resolved::Page(page));
        }

        if let Some(course) = self.repos.courses.find_by_url_component(first).await? {
            debug!("'{}' resolved to course {}", first, course.id);
            return Ok(Resolved::Course(course));
        }

        Err(SiteError::not_found(path_of(&[first])))
    }

    /// 解析两段路径
    ///
    /// 第一段是文章列表页面时尝试文章；否则或文章不存在时，
    /// 再尝试课程及其下属章节
    pub async fn resolve_two(&self, first: &str, second: &str) -> Result<Resolved, SiteError> {
        if let Some(page) = self.repos.pages.find_by_url_component(first).await? {
            if page.magic == PageMagic::Articles {
                if let Some(article) = self.repos.articles.find_by_url_component(second).await? {
                    debug!("'{}/{}' resolved to article {}", first, second, article.id);
                    return Ok(Resolved::Article { page, article });
                }
            }
        }

        if let Some(course) = self.repos.courses.find_by_url_component(first).await? {
            if let Some(chapter) = self
                .repos
                .chapters
                .find_by_url_component(course.id, second)
                .await?
            {
                debug!("'{}/{}' resolved to chapter {}", first, second, chapter.id);
                return Ok(Resolved::Chapter { course, chapter });
            }
        }

        Err(SiteError::not_found(path_of(&[first, second])))
    }

    /// 解析三段路径
    ///
    /// 课程、章节和课时只在缓存的课程树中查找，命中后再按ID加载课时及其练习题
    pub async fn resolve_three(
        &self,
        first: &str,
        second: &str,
        third: &str,
    ) -> Result<Resolved, SiteError> {
        let path = path_of(&[first, second, third]);
        let tree = self.tree.snapshot();

        let (course_id, chapter_id, lesson_id) = match tree.resolve_lesson(first, second, third) {
            Some(location) => (location.course.id, location.chapter.id, location.lesson.id),
            None => return Err(SiteError::not_found(path)),
        };

        // 快照可能比数据库旧
        let lesson = match self.repos.lessons.find_by_id(lesson_id).await? {
            Some(lesson) => lesson,
            None => return Err(SiteError::not_found(path)),
        };
        let tasks = self
            .repos
            .tasks
            .find_by_lesson_order_by_sort_index(lesson.id)
            .await?;

        debug!("'{}' resolved to lesson {}", path, lesson.id);
        Ok(Resolved::Lesson {
            tree,
            course_id,
            chapter_id,
            lesson,
            tasks,
        })
    }
}

/// 错误信息中展示的原始路径
fn path_of(segments: &[&str]) -> String {
    if segments.iter().all(|s| s.is_empty()) {
        return "/".to_string();
    }
    let mut path = String::from("/");
    for segment in segments {
        path.push_str(segment);
        path.push('/');
    }
    path
}

#[cfg(test)]
#[path = "route_resolver_test.rs"]
mod tests;
