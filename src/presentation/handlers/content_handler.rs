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
    extract::{Extension, Path},
    response::Html,
};
use std::sync::Arc;
use tracing::warn;

use crate::{
    domain::{
        models::page::{Page, PageMagic},
        services::route_resolver::Resolved,
    },
    presentation::{
        state::SiteState,
        views::{catalog, catalog::SiteNavigation, pages},
    },
    utils::errors::SiteError,
};

/// 根路径，对应空路径片段
pub async fn root(Extension(state): Extension<Arc<SiteState>>) -> Result<Html<String>, SiteError> {
    let resolved = state.resolver.resolve_one("").await?;
    render(&state, resolved).await
}

/// `/{first}/`
pub async fn one_part(
    Extension(state): Extension<Arc<SiteState>>,
    Path(first): Path<String>,
) -> Result<Html<String>, SiteError> {
    let resolved = state.resolver.resolve_one(&first).await?;
    render(&state, resolved).await
}

/// `/{first}/{second}/`
pub async fn two_parts(
    Extension(state): Extension<Arc<SiteState>>,
    Path((first, second)): Path<(String, String)>,
) -> Result<Html<String>, SiteError> {
    let resolved = state.resolver.resolve_two(&first, &second).await?;
    render(&state, resolved).await
}

/// `/{first}/{second}/{third}/`
pub async fn three_parts(
    Extension(state): Extension<Arc<SiteState>>,
    Path((first, second, third)): Path<(String, String, String)>,
) -> Result<Html<String>, SiteError> {
    let resolved = state.resolver.resolve_three(&first, &second, &third).await?;
    render(&state, resolved).await
}

async fn render(state: &SiteState, resolved: Resolved) -> Result<Html<String>, SiteError> {
    let html = match resolved {
        Resolved::Page(page) => render_page(state, &page).await?,
        Resolved::Course(course) => {
            let (index, tree_page) = navigation_pages(state).await?;
            let tree = state.tree.snapshot();
            catalog::course_page(
                &state.view,
                SiteNavigation {
                    index: index.as_ref(),
                    tree: tree_page.as_ref(),
                },
                &course,
                tree.course(course.id),
                tree.course_neighbours(course.id),
            )
        }
        Resolved::Chapter { course, chapter } => {
            let (index, tree_page) = navigation_pages(state).await?;
            let tree = state.tree.snapshot();
            let location = tree.locate_chapter(course.id, chapter.id);
            if location.is_none() {
                warn!("Chapter {} is not in the course tree yet", chapter.id);
            }
            catalog::chapter_page(
                &state.view,
                SiteNavigation {
                    index: index.as_ref(),
                    tree: tree_page.as_ref(),
                },
                &course,
                &chapter,
                location,
            )
        }
        Resolved::Lesson {
            tree,
            course_id,
            chapter_id,
            lesson,
            tasks,
        } => {
            let location = tree
                .locate_lesson(course_id, chapter_id, lesson.id)
                .ok_or_else(|| SiteError::not_found(format!("lesson {}", lesson.id)))?;
            let (index, tree_page) = navigation_pages(state).await?;
            catalog::lesson_page(
                &state.view,
                SiteNavigation {
                    index: index.as_ref(),
                    tree: tree_page.as_ref(),
                },
                location,
                &lesson,
                &tasks,
            )
        }
        Resolved::Article { page, article } => {
            let index = state.repos.pages.find_by_magic(PageMagic::Index).await?;
            pages::article_page(&state.view, index.as_ref(), &page, &article)
        }
    };
    Ok(Html(html))
}

async fn render_page(state: &SiteState, page: &Page) -> Result<String, SiteError> {
    let html = match page.magic {
        PageMagic::Index => {
            let tree = state.tree.snapshot();
            let articles_page = state.repos.pages.find_by_magic(PageMagic::Articles).await?;
            let articles = match &articles_page {
                Some(_) => {
                    let mut articles = state
                        .repos
                        .articles
                        .find_all_basic_published_order_by_sort_index()
                        .await?;
                    articles.truncate(state.index_articles);
                    articles
                }
                None => Vec::new(),
            };
            pages::index_page(
                &state.view,
                page,
                tree.courses(),
                articles_page.as_ref().map(|p| (p, articles.as_slice())),
            )
        }
        PageMagic::Tree => {
            let index = state.repos.pages.find_by_magic(PageMagic::Index).await?;
            pages::tree_page(&state.view, index.as_ref(), page, &state.tree.snapshot())
        }
        PageMagic::Articles => {
            let index = state.repos.pages.find_by_magic(PageMagic::Index).await?;
            let articles = state
                .repos
                .articles
                .find_all_basic_published_order_by_sort_index()
                .await?;
            pages::articles_page(&state.view, index.as_ref(), page, &articles)
        }
        PageMagic::Generic => {
            let index = state.repos.pages.find_by_magic(PageMagic::Index).await?;
            pages::generic_page(&state.view, index.as_ref(), page)
        }
    };
    Ok(html)
}

/// 面包屑中的首页和课程树页面
async fn navigation_pages(state: &SiteState) -> Result<(Option<Page>, Option<Page>), SiteError> {
    let (index, tree) = tokio::try_join!(
        state.repos.pages.find_by_magic(PageMagic::Index),
        state.repos.pages.find_by_magic(PageMagic::Tree),
    )?;
    Ok((index, tree))
}
