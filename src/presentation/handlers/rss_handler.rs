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

use axum::{
    extract::Extension,
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    domain::models::page::PageMagic,
    presentation::{state::SiteState, views::rss},
    utils::errors::SiteError,
};

/// 已发布文章的RSS订阅
///
/// 没有文章列表页面时返回404
pub async fn articles_rss(
    Extension(state): Extension<Arc<SiteState>>,
) -> Result<impl IntoResponse, SiteError> {
    let page = state
        .repos
        .pages
        .find_by_magic(PageMagic::Articles)
        .await?
        .ok_or_else(|| SiteError::not_found("/articles.rss"))?;
    let articles = state
        .repos
        .articles
        .find_all_published_order_by_sort_index()
        .await?;

    let xml = rss::rss_feed(&state.site_url, &page, &articles);
    Ok((
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        xml,
    ))
}
