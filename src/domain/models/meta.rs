// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 页面SEO元信息
///
/// 所有可公开访问的内容实体都携带一份，渲染时写入 `<head>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// `<title>` 文本
    pub title: String,
    /// `description` 元标签
    pub description: String,
    /// `keywords` 元标签
    pub keywords: String,
}
