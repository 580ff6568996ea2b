// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::course::{Chapter, Course, Lesson, Task};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

/// 课程目录树
///
/// 课程 → 章节 → 课时 → 练习题 的完整层级，每一层按排序索引升序排列。
/// 构建完成后不可变，由缓存整体替换。
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseTree {
    courses: Vec<CourseNode>,
}

/// 课程树中的课程节点
#[derive(Debug, Clone, Serialize)]
pub struct CourseNode {
    pub id: Uuid,
    pub link_text: String,
    pub url_path_component: String,
    pub chapters: Vec<ChapterNode>,
}

/// 课程树中的章节节点
#[derive(Debug, Clone, Serialize)]
pub struct ChapterNode {
    pub id: Uuid,
    pub link_text: String,
    pub url_path_component: String,
    pub lessons: Vec<LessonNode>,
}

/// 课程树中的课时节点
#[derive(Debug, Clone, Serialize)]
pub struct LessonNode {
    pub id: Uuid,
    pub link_text: String,
    pub url_path_component: String,
    pub tasks: Vec<TaskNode>,
}

/// 课程树中的练习题节点
#[derive(Debug, Clone, Serialize)]
pub struct TaskNode {
    pub id: Uuid,
    pub link_text: String,
    pub url_path_component: String,
}

/// 同级节点中的前后邻居，首尾位置对应的一侧为空
#[derive(Debug)]
pub struct Neighbours<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

// 只持有引用，复制不要求 `T: Copy`
impl<T> Clone for Neighbours<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbours<'_, T> {}

impl<'a, T> Neighbours<'a, T> {
    fn around(siblings: &'a [T], index: usize) -> Self {
        Self {
            previous: index.checked_sub(1).and_then(|i| siblings.get(i)),
            next: siblings.get(index + 1),
        }
    }
}

/// 章节在树中的位置
#[derive(Debug, Clone, Copy)]
pub struct ChapterLocation<'a> {
    pub course: &'a CourseNode,
    pub chapter: &'a ChapterNode,
    pub neighbours: Neighbours<'a, ChapterNode>,
}

/// 课时在树中的位置
#[derive(Debug, Clone, Copy)]
pub struct LessonLocation<'a> {
    pub course: &'a CourseNode,
    pub chapter: &'a ChapterNode,
    pub lesson: &'a LessonNode,
    pub neighbours: Neighbours<'a, LessonNode>,
}

impl CourseTree {
    /// 由四张表的全部记录构建目录树
    ///
    /// 各层按 (排序索引, ID) 排序，与管理面板调整顺序时使用的次序一致；
    /// 父节点不存在的子记录会被丢弃并记录警告
    pub fn build(
        mut courses: Vec<Course>,
        mut chapters: Vec<Chapter>,
        mut lessons: Vec<Lesson>,
        mut tasks: Vec<Task>,
    ) -> Self {
        courses.sort_by_key(|c| (c.sort_index, c.id));
        chapters.sort_by_key(|c| (c.sort_index, c.id));
        lessons.sort_by_key(|l| (l.sort_index, l.id));
        tasks.sort_by_key(|t| (t.sort_index, t.id));

        let mut tasks_by_lesson: HashMap<Uuid, Vec<TaskNode>> = HashMap::new();
        for task in tasks {
            tasks_by_lesson.entry(task.lesson_id).or_default().push(TaskNode {
                id: task.id,
                link_text: task.link_text,
                url_path_component: task.url_path_component,
            });
        }

        let mut lessons_by_chapter: HashMap<Uuid, Vec<LessonNode>> = HashMap::new();
        for lesson in lessons {
            let tasks = tasks_by_lesson.remove(&lesson.id).unwrap_or_default();
            lessons_by_chapter
                .entry(lesson.chapter_id)
                .or_default()
                .push(LessonNode {
                    id: lesson.id,
                    link_text: lesson.link_text,
                    url_path_component: lesson.url_path_component,
                    tasks,
                });
        }

        let mut chapters_by_course: HashMap<Uuid, Vec<ChapterNode>> = HashMap::new();
        for chapter in chapters {
            let lessons = lessons_by_chapter.remove(&chapter.id).unwrap_or_default();
            chapters_by_course
                .entry(chapter.course_id)
                .or_default()
                .push(ChapterNode {
                    id: chapter.id,
                    link_text: chapter.link_text,
                    url_path_component: chapter.url_path_component,
                    lessons,
                });
        }

        let courses = courses
            .into_iter()
            .map(|course| CourseNode {
                chapters: chapters_by_course.remove(&course.id).unwrap_or_default(),
                id: course.id,
                link_text: course.link_text,
                url_path_component: course.url_path_component,
            })
            .collect();

        let orphans = tasks_by_lesson.values().map(Vec::len).sum::<usize>()
            + lessons_by_chapter.values().map(Vec::len).sum::<usize>()
            + chapters_by_course.values().map(Vec::len).sum::<usize>();
        if orphans > 0 {
            warn!("Course tree dropped {} nodes without a parent", orphans);
        }

        Self { courses }
    }

    /// 所有课程，按排序索引升序
    pub fn courses(&self) -> &[CourseNode] {
        &self.courses
    }

    /// 根据ID查找课程
    pub fn course(&self, id: Uuid) -> Option<&CourseNode> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// 根据路径片段查找课程
    pub fn course_by_url(&self, component: &str) -> Option<&CourseNode> {
        self.courses
            .iter()
            .find(|c| c.url_path_component == component)
    }

    /// 课程的前后邻居
    pub fn course_neighbours(&self, id: Uuid) -> Option<Neighbours<'_, CourseNode>> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(Neighbours::around(&self.courses, index))
    }

    /// 根据ID定位章节及其前后邻居
    pub fn locate_chapter(&self, course_id: Uuid, chapter_id: Uuid) -> Option<ChapterLocation<'_>> {
        let course = self.course(course_id)?;
        let index = course.chapters.iter().position(|ch| ch.id == chapter_id)?;
        Some(ChapterLocation {
            course,
            chapter: &course.chapters[index],
            neighbours: Neighbours::around(&course.chapters, index),
        })
    }

    /// 按三段路径解析课时
    ///
    /// 每一段都只在上一段的子节点中查找
    pub fn resolve_lesson(
        &self,
        course: &str,
        chapter: &str,
        lesson: &str,
    ) -> Option<LessonLocation<'_>> {
        let course = self.course_by_url(course)?;
        let chapter = course
            .chapters
            .iter()
            .find(|ch| ch.url_path_component == chapter)?;
        let index = chapter
            .lessons
            .iter()
            .position(|l| l.url_path_component == lesson)?;
        Some(LessonLocation {
            course,
            chapter,
            lesson: &chapter.lessons[index],
            neighbours: Neighbours::around(&chapter.lessons, index),
        })
    }

    /// 根据ID定位课时
    pub fn locate_lesson(
        &self,
        course_id: Uuid,
        chapter_id: Uuid,
        lesson_id: Uuid,
    ) -> Option<LessonLocation<'_>> {
        let location = self.locate_chapter(course_id, chapter_id)?;
        let chapter = location.chapter;
        let index = chapter.lessons.iter().position(|l| l.id == lesson_id)?;
        Some(LessonLocation {
            course: location.course,
            chapter,
            lesson: &chapter.lessons[index],
            neighbours: Neighbours::around(&chapter.lessons, index),
        })
    }

    /// 节点总数（课程、章节、课时、练习题）
    pub fn node_count(&self) -> usize {
        self.courses
            .iter()
            .map(|c| {
                1 + c
                    .chapters
                    .iter()
                    .map(|ch| 1 + ch.lessons.iter().map(|l| 1 + l.tasks.len()).sum::<usize>())
                    .sum::<usize>()
            })
            .sum()
    }
}
