// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::layout::{
    self, attr, breadcrumbs, link, page_crumb, prev_next, text, Crumb, Document, ViewContext,
};
use crate::domain::models::course::{Chapter, Course, Lesson, Task};
use crate::domain::models::page::Page;
use crate::domain::models::task_error_report::TaskErrorKind;
use crate::domain::models::tree::{
    ChapterLocation, ChapterNode, CourseNode, LessonLocation, LessonNode, Neighbours,
};
use crate::utils::url_utils;
use std::fmt::Write;

/// 面包屑开头的两个固定页面
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteNavigation<'a> {
    pub index: Option<&'a Page>,
    pub tree: Option<&'a Page>,
}

impl SiteNavigation<'_> {
    fn crumbs(&self) -> Vec<Crumb> {
        [self.index, self.tree]
            .into_iter()
            .flatten()
            .map(|p| page_crumb(&p.url_path_component, &p.link_text))
            .collect()
    }
}

/// 章节下的课时列表，每个课时附带练习题锚点
pub fn lessons_list(course: &CourseNode, chapter: &ChapterNode) -> String {
    let mut html = String::from(r#"<ol class="lessons">"#);
    for lesson in &chapter.lessons {
        let _ = write!(
            html,
            "<li>{}",
            link(
                &url_utils::url_of_lesson(
                    &course.url_path_component,
                    &chapter.url_path_component,
                    &lesson.url_path_component
                ),
                &lesson.link_text
            )
        );
        if !lesson.tasks.is_empty() {
            html.push_str(r#"<ul class="tasks">"#);
            for task in &lesson.tasks {
                let href = url_utils::url_of_task(
                    &course.url_path_component,
                    &chapter.url_path_component,
                    &lesson.url_path_component,
                    &task.url_path_component,
                );
                let _ = write!(html, "<li>{}</li>", link(&href, &task.link_text));
            }
            html.push_str("</ul>");
        }
        html.push_str("</li>");
    }
    html.push_str("</ol>");
    html
}

/// 课程下的章节及课时
pub fn course_outline(course: &CourseNode) -> String {
    let mut html = String::from(r#"<ol class="chapters">"#);
    for chapter in &course.chapters {
        let _ = write!(
            html,
            "<li>{}{}</li>",
            link(
                &url_utils::url_of_chapter(&course.url_path_component, &chapter.url_path_component),
                &chapter.link_text
            ),
            lessons_list(course, chapter)
        );
    }
    html.push_str("</ol>");
    html
}

pub fn course_page(
    ctx: &ViewContext,
    nav: SiteNavigation<'_>,
    course: &Course,
    node: Option<&CourseNode>,
    neighbours: Option<Neighbours<'_, CourseNode>>,
) -> String {
    let mut body = String::new();
    body.push_str(&breadcrumbs(&nav.crumbs()));
    let _ = write!(
        body,
        "<main><h1>{}</h1>{}</main>",
        text(&course.heading),
        course.description
    );
    if let Some(node) = node {
        let _ = write!(body, "<nav>{}</nav>", course_outline(node));
    }
    if let Some(neighbours) = neighbours {
        body.push_str(&prev_next(
            neighbours
                .previous
                .map(|c| (url_utils::url_of_course(&c.url_path_component), c.link_text.as_str())),
            neighbours
                .next
                .map(|c| (url_utils::url_of_course(&c.url_path_component), c.link_text.as_str())),
            ctx.messages.get("course_previous"),
            ctx.messages.get("course_next"),
        ));
    }

    layout::render(
        ctx,
        Document {
            meta: &course.meta,
            head_markup: "",
            body,
            before_body_end_markup: "",
        },
    )
}

/// 章节页面
///
/// 位置缺失（课程树尚未刷新）时只渲染正文，不输出课时列表和前后链接
pub fn chapter_page(
    ctx: &ViewContext,
    nav: SiteNavigation<'_>,
    course: &Course,
    chapter: &Chapter,
    location: Option<ChapterLocation<'_>>,
) -> String {
    let mut crumbs = nav.crumbs();
    crumbs.push(Crumb {
        text: course.link_text.clone(),
        href: url_utils::url_of_course(&course.url_path_component),
    });

    let mut body = breadcrumbs(&crumbs);
    let _ = write!(
        body,
        "<main><h1>{}</h1>{}</main>",
        text(&chapter.heading),
        chapter.description
    );

    if let Some(location) = location {
        let _ = write!(body, "<nav>{}</nav>", lessons_list(location.course, location.chapter));
        let url_of = |ch: &ChapterNode| {
            url_utils::url_of_chapter(&location.course.url_path_component, &ch.url_path_component)
        };
        body.push_str(&prev_next(
            location
                .neighbours
                .previous
                .map(|ch| (url_of(ch), ch.link_text.as_str())),
            location
                .neighbours
                .next
                .map(|ch| (url_of(ch), ch.link_text.as_str())),
            ctx.messages.get("chapter_previous"),
            ctx.messages.get("chapter_next"),
        ));
    }

    layout::render(
        ctx,
        Document {
            meta: &chapter.meta,
            head_markup: "",
            body,
            before_body_end_markup: "",
        },
    )
}

fn task_section(ctx: &ViewContext, task: &Task) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section class="task" id="{id}"><h2>{heading}</h2><div class="condition">{condition}</div><pre class="initial-code"><code>{code}</code></pre>"#,
        id = attr(&task.url_path_component),
        heading = text(&task.heading),
        condition = task.condition,
        code = text(&task.initial_code),
    );

    let _ = write!(
        html,
        r#"<details class="report"><summary>{label}</summary><form method="post" action="/task/report"><input type="hidden" name="task_id" value="{task_id}"><select name="error_kind">"#,
        label = text(ctx.messages.get("report_error")),
        task_id = task.id,
    );
    for kind in [
        TaskErrorKind::Misprint,
        TaskErrorKind::UnclearCondition,
        TaskErrorKind::WrongCheck,
        TaskErrorKind::Other,
    ] {
        let value = kind.to_string();
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            value,
            text(ctx.messages.get(&format!("error_kind_{}", value)))
        );
    }
    html.push_str(
        r#"</select><textarea name="text" maxlength="4096"></textarea><input type="hidden" name="code" value=""><button type="submit">OK</button></form></details></section>"#,
    );
    html
}

pub fn lesson_page(
    ctx: &ViewContext,
    nav: SiteNavigation<'_>,
    location: LessonLocation<'_>,
    lesson: &Lesson,
    tasks: &[Task],
) -> String {
    let course = location.course;
    let chapter = location.chapter;

    let mut crumbs = nav.crumbs();
    crumbs.push(Crumb {
        text: course.link_text.clone(),
        href: url_utils::url_of_course(&course.url_path_component),
    });
    crumbs.push(Crumb {
        text: chapter.link_text.clone(),
        href: url_utils::url_of_chapter(&course.url_path_component, &chapter.url_path_component),
    });

    let mut body = breadcrumbs(&crumbs);
    let _ = write!(
        body,
        "<main><h1>{}</h1>{}",
        text(&lesson.heading),
        lesson.body_markup
    );
    if !tasks.is_empty() {
        let _ = write!(body, "<h2>{}</h2>", text(ctx.messages.get("tasks")));
        for task in tasks {
            body.push_str(&task_section(ctx, task));
        }
    }
    body.push_str("</main>");

    let url_of = |l: &LessonNode| {
        url_utils::url_of_lesson(
            &course.url_path_component,
            &chapter.url_path_component,
            &l.url_path_component,
        )
    };
    body.push_str(&prev_next(
        location
            .neighbours
            .previous
            .map(|l| (url_of(l), l.link_text.as_str())),
        location
            .neighbours
            .next
            .map(|l| (url_of(l), l.link_text.as_str())),
        ctx.messages.get("lesson_previous"),
        ctx.messages.get("lesson_next"),
    ));

    layout::render(
        ctx,
        Document {
            meta: &lesson.meta,
            head_markup: "",
            body,
            before_body_end_markup: "",
        },
    )
}
