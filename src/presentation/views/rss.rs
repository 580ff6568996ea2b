// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::layout::text;
use crate::domain::models::article::Article;
use crate::domain::models::page::Page;
use crate::utils::url_utils;
use std::fmt::Write;
use url::Url;

/// RSS 2.0 文章订阅
///
/// 频道标题和描述取自文章列表页面的元信息，条目链接为站点地址下的绝对URL
pub fn rss_feed(site_url: &Url, articles_page: &Page, articles: &[Article]) -> String {
    let channel_link = absolute(
        site_url,
        &url_utils::url_of_page(&articles_page.url_path_component),
    );

    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = write!(
        xml,
        r#"
<rss version="2.0">
<channel>
<title>{}</title>
<link>{}</link>
<description>{}</description>
"#,
        text(&articles_page.meta.title),
        text(&channel_link),
        text(&articles_page.meta.description),
    );

    for article in articles {
        let link = absolute(
            site_url,
            &url_utils::url_of_article(
                &articles_page.url_path_component,
                &article.url_path_component,
            ),
        );
        let _ = write!(
            xml,
            r#"<item>
<title>{title}</title>
<link>{link}</link>
<guid>{link}</guid>
<description>{description}</description>
<pubDate>{date}</pubDate>
</item>
"#,
            title = text(&article.link_text),
            link = text(&link),
            description = text(&article.meta.description),
            date = article.created_at.to_rfc2822(),
        );
    }

    xml.push_str("</channel>\n</rss>\n");
    xml
}

fn absolute(site_url: &Url, path: &str) -> String {
    url_utils::resolve_url(site_url, path)
        .map(String::from)
        .unwrap_or_else(|_| path.to_string())
}
