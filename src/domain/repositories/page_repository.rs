// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::page::{Page, PageMagic};
use async_trait::async_trait;
use uuid::Uuid;

/// 页面仓库特质
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// 根据ID查找页面
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, RepositoryError>;

    /// 根据URL路径片段查找页面
    ///
    /// 根页面的路径片段为空字符串
    async fn find_by_url_component(&self, component: &str)
        -> Result<Option<Page>, RepositoryError>;

    /// 查找第一个（按排序索引）具有指定渲染方式的页面
    async fn find_by_magic(&self, magic: PageMagic) -> Result<Option<Page>, RepositoryError>;

    /// 按排序索引升序列出所有页面
    async fn find_all_order_by_sort_index(&self) -> Result<Vec<Page>, RepositoryError>;
}
