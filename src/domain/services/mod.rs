// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 课程树缓存（course_tree_cache）：持有课程目录树的快照，支持整体刷新
/// - 路由解析（route_resolver）：把一到三段URL路径解析为内容实体
pub mod course_tree_cache;
pub mod route_resolver;

#[cfg(test)]
pub(crate) mod test_support;
