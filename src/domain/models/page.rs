// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::meta::Meta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 独立页面实体
///
/// 通过 `magic` 标记选择渲染方式；根页面的路径片段为空字符串
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 页面唯一标识符
    pub id: Uuid,
    /// URL路径片段，全局唯一
    pub url_path_component: String,
    /// 链接文本
    pub link_text: String,
    /// SEO元信息
    pub meta: Meta,
    /// 页面主标题
    pub heading: String,
    /// 正文（HTML）
    pub body_markup: String,
    /// 追加到 `<head>` 的标记
    pub head_markup: String,
    /// 追加到 `</body>` 之前的标记
    pub before_body_end_markup: String,
    /// 渲染方式标记
    pub magic: PageMagic,
    /// 排序索引
    pub sort_index: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub last_modified: DateTime<Utc>,
}

/// 页面渲染方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageMagic {
    /// 首页：课程列表和最新文章
    Index,
    /// 完整课程树
    Tree,
    /// 文章列表，文章挂在该页面路径之下
    Articles,
    /// 普通页面，只展示正文
    #[default]
    Generic,
}

impl fmt::Display for PageMagic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageMagic::Index => write!(f, "index"),
            PageMagic::Tree => write!(f, "tree"),
            PageMagic::Articles => write!(f, "articles"),
            PageMagic::Generic => write!(f, "generic"),
        }
    }
}

impl FromStr for PageMagic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(PageMagic::Index),
            "tree" => Ok(PageMagic::Tree),
            "articles" => Ok(PageMagic::Articles),
            "generic" => Ok(PageMagic::Generic),
            _ => Err(()),
        }
    }
}
