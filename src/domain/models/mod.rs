// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义站点内容的核心实体：
/// - 课程目录（course）：课程、章节、课时、练习题
/// - 课程树（tree）：启动时载入内存的目录结构及导航计算
/// - 页面（page）与文章（article）
/// - 访客提交（task_error_report）
pub mod article;
pub mod code_review;
pub mod course;
pub mod meta;
pub mod page;
pub mod task_error_report;
pub mod tree;
