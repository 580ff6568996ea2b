// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面渲染
///
/// 纯文本一律转义，正文等标记字段由管理员维护，原样输出
pub mod catalog;
pub mod layout;
pub mod messages;
pub mod pages;
pub mod rss;
