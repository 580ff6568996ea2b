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

use crate::config::settings::Settings;
use crate::domain::services::course_tree_cache::CourseTreeCache;
use crate::infrastructure::admin::AdminPanel;
use crate::infrastructure::observability::hits::HitCounter;
use crate::infrastructure::repositories::content_repositories;
use crate::presentation::routes;
use crate::presentation::state::SiteState;
use crate::presentation::views::layout::ViewContext;
use crate::presentation::views::messages::Messages;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// 组装完整的应用
///
/// 创建仓库、加载课程树缓存、构造站点状态、管理面板和访问计数，并返回路由
///
/// # 参数
///
/// * `db` - 已完成迁移的数据库连接
/// * `settings` - 应用配置
pub async fn build_app(db: Arc<DatabaseConnection>, settings: &Settings) -> anyhow::Result<Router> {
    let repos = content_repositories(db.clone());

    let tree = Arc::new(CourseTreeCache::load(repos.clone()).await?);

    let site_url = Url::parse(&settings.site.url)?;
    let view = ViewContext {
        messages: Messages::new(settings.messages.clone()),
        locale: settings.site.locale.clone(),
        static_path: settings.static_files.exposed_path.clone(),
    };
    let state = Arc::new(SiteState::new(
        repos,
        tree.clone(),
        view,
        site_url,
        settings.site.index_articles,
    ));

    let panel = Arc::new(AdminPanel::new(db, tree));
    info!(
        "Admin panel mounted at /{} with {} tables",
        settings.admin.route.trim_matches('/'),
        panel.table_names().len()
    );

    let hits = Arc::new(HitCounter::new());

    Ok(routes::routes(state, panel, hits, settings))
}
