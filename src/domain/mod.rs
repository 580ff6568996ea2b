// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含站点的核心逻辑，包括：
/// - 领域模型（models）：课程目录、页面、文章和错误报告
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：课程树缓存和路由解析
pub mod models;
pub mod repositories;
pub mod services;
