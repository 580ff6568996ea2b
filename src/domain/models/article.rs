// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::meta::Meta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 博客文章实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// 文章唯一标识符
    pub id: Uuid,
    /// 链接文本
    pub link_text: String,
    /// URL路径片段，全局唯一
    pub url_path_component: String,
    /// SEO元信息
    pub meta: Meta,
    /// 页面主标题
    pub heading: String,
    /// 正文（HTML）
    pub body_markup: String,
    /// 排序索引
    pub sort_index: i32,
    /// 是否已发布；未发布的文章不出现在列表和RSS中
    pub published: bool,
    /// 社交网络同步帖子信息
    pub vk_post: Option<VkPostInfo>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间
    pub last_modified: DateTime<Utc>,
}

/// 文章在列表和导航中使用的精简信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleBasicInfo {
    pub id: Uuid,
    pub link_text: String,
    pub url_path_component: String,
    pub last_modified: DateTime<Utc>,
}

/// 社交网络帖子标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VkPostInfo {
    /// 帖子ID
    pub id: String,
    /// 帖子哈希
    pub hash: String,
}

impl VkPostInfo {
    /// 由数据库中的两列构造帖子信息
    ///
    /// 任意一列为空白时视为没有同步帖子
    pub fn from_columns(id: &str, hash: &str) -> Option<Self> {
        if id.trim().is_empty() || hash.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            hash: hash.to_string(),
        })
    }
}

impl Article {
    /// 获取文章精简信息
    pub fn basic_info(&self) -> ArticleBasicInfo {
        ArticleBasicInfo {
            id: self.id,
            link_text: self.link_text.clone(),
            url_path_component: self.url_path_component.clone(),
            last_modified: self.last_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vk_post_requires_both_columns() {
        assert!(VkPostInfo::from_columns("", "abc").is_none());
        assert!(VkPostInfo::from_columns("-1_42", "  ").is_none());

        let info = VkPostInfo::from_columns("-1_42", "abc").unwrap();
        assert_eq!(info.id, "-1_42");
        assert_eq!(info.hash, "abc");
    }
}
