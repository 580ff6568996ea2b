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

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// 应用程序配置设置
///
/// 包含服务器、数据库、静态文件、站点信息、管理面板和本地化文案等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 静态文件配置
    #[serde(rename = "static")]
    pub static_files: StaticSettings,
    /// 站点配置
    pub site: SiteSettings,
    /// 管理面板配置
    pub admin: AdminSettings,
    /// 界面文案覆盖表
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 完整连接URL，设置后忽略其余连接字段
    pub url: Option<String>,
    /// 数据库主机
    pub host: String,
    /// 数据库端口
    pub port: u16,
    /// 数据库名称
    pub name: String,
    /// 数据库用户
    pub user: String,
    /// 数据库密码
    pub password: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 启动时是否执行迁移
    pub run_migrations: bool,
}

impl DatabaseSettings {
    /// 构造数据库连接URL
    ///
    /// 显式配置的 `url` 优先，否则由主机、端口、库名和凭据拼出 Postgres 地址
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                self.name
            ),
        }
    }
}

/// 静态文件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticSettings {
    /// 本地静态文件目录，未配置时不提供静态文件服务
    pub local_dir: Option<String>,
    /// 对外暴露的静态文件路径前缀
    pub exposed_path: String,
}

/// 站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// 站点基础URL，用于RSS等绝对链接
    pub url: String,
    /// 页面语言
    pub locale: String,
    /// 首页展示的文章数量
    pub index_articles: usize,
}

/// 管理面板配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    /// 管理面板挂载路径（不含斜杠）
    pub route: String,
    /// 访问令牌，未配置时不做认证
    pub token: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从 `config/` 目录和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// 从指定目录加载配置
    ///
    /// 依次叠加内置默认值、`{dir}/default`、`{dir}/{APP_ENVIRONMENT}` 和 `JAVANESE__*` 环境变量
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(Environment::with_prefix("JAVANESE").separator("__"));

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            // Default DB settings
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.name", "javanese")?
            .set_default("database.user", "javanese")?
            .set_default("database.password", "")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.run_migrations", true)?
            // Static files
            .set_default("static.exposed_path", "/static")?
            // Site
            .set_default("site.url", "http://localhost:8080")?
            .set_default("site.locale", "ru")?
            .set_default("site.index_articles", 5)?
            // Admin panel
            .set_default("admin.route", "admin")
    }
}
