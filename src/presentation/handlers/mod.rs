// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP处理器模块
///
/// - 内容页面（content_handler）：一到三段路径的页面渲染
/// - RSS（rss_handler）：已发布文章订阅
/// - 错误报告（task_report_handler）：访客提交练习题错误
/// - 管理面板（admin_handler）：内容表的JSON增删改查
pub mod admin_handler;
pub mod content_handler;
pub mod rss_handler;
pub mod task_report_handler;
