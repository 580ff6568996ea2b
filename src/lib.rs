// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用组装
///
/// 把仓库、缓存、站点状态和管理面板连接为一个路由
pub mod app;

/// 应用程序模块
///
/// 表单DTO和访客提交的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含内容实体、课程树、仓库接口和路由解析
pub mod domain;

/// 基础设施模块
///
/// 数据库连接、实体映射、仓库实现和管理面板
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器、中间件和页面渲染
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
