// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::catalog::course_outline;
use super::layout::{self, attr, breadcrumbs, link, page_crumb, text, Document, ViewContext};
use crate::domain::models::article::{Article, ArticleBasicInfo};
use crate::domain::models::page::Page;
use crate::domain::models::tree::{CourseNode, CourseTree};
use crate::utils::url_utils;
use std::fmt::Write;

fn page_document(ctx: &ViewContext, page: &Page, body: String) -> String {
    layout::render(
        ctx,
        Document {
            meta: &page.meta,
            head_markup: &page.head_markup,
            body,
            before_body_end_markup: &page.before_body_end_markup,
        },
    )
}

fn page_main(page: &Page) -> String {
    format!("<h1>{}</h1>{}", text(&page.heading), page.body_markup)
}

fn articles_list(articles_page: &Page, articles: &[ArticleBasicInfo]) -> String {
    let mut html = String::from(r#"<ul class="articles">"#);
    for article in articles {
        let href = url_utils::url_of_article(
            &articles_page.url_path_component,
            &article.url_path_component,
        );
        let _ = write!(html, "<li>{}</li>", link(&href, &article.link_text));
    }
    html.push_str("</ul>");
    html
}

/// 首页：正文、课程列表和最新文章
pub fn index_page(
    ctx: &ViewContext,
    page: &Page,
    courses: &[CourseNode],
    articles: Option<(&Page, &[ArticleBasicInfo])>,
) -> String {
    let mut body = format!("<main>{}", page_main(page));

    let _ = write!(
        body,
        r#"<section class="courses"><h2>{}</h2><ul>"#,
        text(ctx.messages.get("courses"))
    );
    for course in courses {
        let _ = write!(
            body,
            "<li>{}</li>",
            link(&url_utils::url_of_course(&course.url_path_component), &course.link_text)
        );
    }
    body.push_str("</ul></section>");

    if let Some((articles_page, articles)) = articles {
        let _ = write!(
            body,
            r#"<section class="latest-articles"><h2>{}</h2>{}<p>{}</p></section>"#,
            text(ctx.messages.get("latest_articles")),
            articles_list(articles_page, articles),
            link(
                &url_utils::url_of_page(&articles_page.url_path_component),
                ctx.messages.get("all_articles")
            )
        );
    }
    body.push_str("</main>");

    page_document(ctx, page, body)
}

/// 完整课程树页面
pub fn tree_page(ctx: &ViewContext, index: Option<&Page>, page: &Page, tree: &CourseTree) -> String {
    let mut body = String::new();
    if let Some(index) = index {
        body.push_str(&breadcrumbs(&[page_crumb(&index.url_path_component, &index.link_text)]));
    }
    let _ = write!(body, "<main>{}", page_main(page));
    for course in tree.courses() {
        let _ = write!(
            body,
            r#"<section class="course"><h2>{}</h2>{}</section>"#,
            link(&url_utils::url_of_course(&course.url_path_component), &course.link_text),
            course_outline(course)
        );
    }
    body.push_str("</main>");

    page_document(ctx, page, body)
}

/// 文章列表页面
pub fn articles_page(
    ctx: &ViewContext,
    index: Option<&Page>,
    page: &Page,
    articles: &[ArticleBasicInfo],
) -> String {
    let mut body = String::new();
    if let Some(index) = index {
        body.push_str(&breadcrumbs(&[page_crumb(&index.url_path_component, &index.link_text)]));
    }
    let _ = write!(
        body,
        "<main>{}{}</main>",
        page_main(page),
        articles_list(page, articles)
    );

    page_document(ctx, page, body)
}

pub fn generic_page(ctx: &ViewContext, index: Option<&Page>, page: &Page) -> String {
    let mut body = String::new();
    if let Some(index) = index {
        if index.id != page.id {
            body.push_str(&breadcrumbs(&[page_crumb(&index.url_path_component, &index.link_text)]));
        }
    }
    let _ = write!(body, "<main>{}</main>", page_main(page));

    page_document(ctx, page, body)
}

/// 文章页面
///
/// 有同步帖子时输出社交网络组件的挂载点
pub fn article_page(
    ctx: &ViewContext,
    index: Option<&Page>,
    articles_page: &Page,
    article: &Article,
) -> String {
    let mut crumbs = Vec::new();
    if let Some(index) = index {
        crumbs.push(page_crumb(&index.url_path_component, &index.link_text));
    }
    crumbs.push(page_crumb(
        &articles_page.url_path_component,
        &articles_page.link_text,
    ));

    let mut body = breadcrumbs(&crumbs);
    let _ = write!(
        body,
        "<main><article><h1>{}</h1>{}</article></main>",
        text(&article.heading),
        article.body_markup
    );
    if let Some(post) = &article.vk_post {
        let _ = write!(
            body,
            r#"<div id="vk_post" data-post-id="{}" data-hash="{}"></div>"#,
            attr(&post.id),
            attr(&post.hash)
        );
    }

    layout::render(
        ctx,
        Document {
            meta: &article.meta,
            head_markup: "",
            body,
            before_body_end_markup: "",
        },
    )
}

/// 错误页面
pub fn error_page(ctx: &ViewContext, title: &str, message: &str, path: &str) -> String {
    let meta = crate::domain::models::meta::Meta {
        title: title.to_string(),
        ..Default::default()
    };
    let body = format!(
        r#"<main class="error"><h1>{}</h1><p>{}</p><p><code>{}</code></p><p>{}</p></main>"#,
        text(title),
        text(message),
        text(path),
        link("/", ctx.messages.get("to_index"))
    );
    layout::render(
        ctx,
        Document {
            meta: &meta,
            head_markup: "",
            body,
            before_body_end_markup: "",
        },
    )
}
