// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::ContentRepositories;
use crate::domain::services::course_tree_cache::CourseTreeCache;
use crate::domain::services::route_resolver::RouteResolver;
use crate::presentation::views::layout::ViewContext;
use std::sync::Arc;
use url::Url;

/// 公开站点处理器共享的状态
pub struct SiteState {
    pub repos: ContentRepositories,
    pub tree: Arc<CourseTreeCache>,
    pub resolver: RouteResolver,
    pub view: ViewContext,
    /// 站点基础URL，用于RSS中的绝对链接
    pub site_url: Url,
    /// 首页展示的文章数量
    pub index_articles: usize,
}

impl SiteState {
    pub fn new(
        repos: ContentRepositories,
        tree: Arc<CourseTreeCache>,
        view: ViewContext,
        site_url: Url,
        index_articles: usize,
    ) -> Self {
        Self {
            resolver: RouteResolver::new(repos.clone(), tree.clone()),
            repos,
            tree,
            view,
            site_url,
            index_articles,
        }
    }
}
