// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::messages::Messages;
use crate::domain::models::meta::Meta;
use crate::utils::url_utils;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// 渲染上下文，所有页面共用
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub messages: Messages,
    /// 页面语言
    pub locale: String,
    /// 静态文件路径前缀
    pub static_path: String,
}

impl ViewContext {
    fn static_url(&self, file: &str) -> String {
        format!("{}/{}", self.static_path.trim_end_matches('/'), file)
    }
}

/// 一个完整HTML文档的组成部分
pub struct Document<'a> {
    pub meta: &'a Meta,
    /// 插入 `<head>` 末尾的可信标记
    pub head_markup: &'a str,
    pub body: String,
    /// 插入 `</body>` 之前的可信标记
    pub before_body_end_markup: &'a str,
}

/// 面包屑中的一项
pub struct Crumb {
    pub text: String,
    pub href: String,
}

/// 转义纯文本
pub fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// 转义双引号属性值
pub fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

pub fn link(href: &str, link_text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, attr(href), text(link_text))
}

/// 拼装完整HTML文档
pub fn render(ctx: &ViewContext, doc: Document<'_>) -> String {
    let mut html = String::with_capacity(doc.body.len() + 1024);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<link rel="stylesheet" href="{css}">
<link rel="alternate" type="application/rss+xml" href="/articles.rss">
{head_markup}
</head>
<body>
{body}
{before_body_end_markup}
</body>
</html>
"#,
        locale = attr(&ctx.locale),
        title = text(&doc.meta.title),
        description = attr(&doc.meta.description),
        keywords = attr(&doc.meta.keywords),
        css = attr(&ctx.static_url("style.css")),
        head_markup = doc.head_markup,
        body = doc.body,
        before_body_end_markup = doc.before_body_end_markup,
    );
    html
}

/// 面包屑导航，各项以斜杠分隔
pub fn breadcrumbs(crumbs: &[Crumb]) -> String {
    let links: Vec<String> = crumbs.iter().map(|c| link(&c.href, &c.text)).collect();
    format!(r#"<nav class="breadcrumbs">{}</nav>"#, links.join(" / "))
}

/// 上一项和下一项链接；缺失的一侧不输出
pub fn prev_next(
    previous: Option<(String, &str)>,
    next: Option<(String, &str)>,
    previous_label: &str,
    next_label: &str,
) -> String {
    if previous.is_none() && next.is_none() {
        return String::new();
    }
    let mut html = String::from(r#"<nav class="prev-next">"#);
    if let Some((href, link_text)) = previous {
        let _ = write!(
            html,
            r#"<a class="previous" rel="prev" href="{}">{}: {}</a>"#,
            attr(&href),
            text(previous_label),
            text(link_text)
        );
    }
    if let Some((href, link_text)) = next {
        let _ = write!(
            html,
            r#"<a class="next" rel="next" href="{}">{}: {}</a>"#,
            attr(&href),
            text(next_label),
            text(link_text)
        );
    }
    html.push_str("</nav>");
    html
}

/// 页面面包屑项
pub fn page_crumb(url_path_component: &str, link_text: &str) -> Crumb {
    Crumb {
        text: link_text.to_string(),
        href: url_utils::url_of_page(url_path_component),
    }
}
