// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 管理面板认证、公开站点的错误页面和访问计数
pub mod auth_middleware;
pub mod error_page_middleware;
pub mod hit_counter_middleware;
