// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 对单个路径片段做百分号编码
pub fn encode_component(component: &str) -> String {
    urlencoding::encode(component).into_owned()
}

/// 由若干路径片段拼出以斜杠结尾的站内地址
///
/// 空片段列表得到根路径 `/`
pub fn path_of(components: &[&str]) -> String {
    let mut path = String::from("/");
    for component in components {
        path.push_str(&encode_component(component));
        path.push('/');
    }
    path
}

/// 页面地址；根页面的片段为空，对应 `/`
pub fn url_of_page(page: &str) -> String {
    if page.is_empty() {
        "/".to_string()
    } else {
        path_of(&[page])
    }
}

pub fn url_of_course(course: &str) -> String {
    path_of(&[course])
}

pub fn url_of_chapter(course: &str, chapter: &str) -> String {
    path_of(&[course, chapter])
}

pub fn url_of_lesson(course: &str, chapter: &str, lesson: &str) -> String {
    path_of(&[course, chapter, lesson])
}

/// 练习题锚点，位于所属课时页面内
pub fn url_of_task(course: &str, chapter: &str, lesson: &str, task: &str) -> String {
    format!(
        "{}#{}",
        url_of_lesson(course, chapter, lesson),
        encode_component(task)
    )
}

pub fn url_of_article(articles_page: &str, article: &str) -> String {
    path_of(&[articles_page, article])
}

/// 将站内路径转换为基于站点地址的绝对URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}
