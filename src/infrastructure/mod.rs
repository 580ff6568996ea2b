// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 管理面板（admin）：基于实体的通用增删改查
/// - 数据库（database）：提供数据库连接和实体映射
/// - 可观测性（observability）：页面访问计数
/// - 仓库实现（repositories）：提供领域仓库接口的具体实现
///
/// 基础设施层依赖领域层的抽象接口，领域层不感知具体实现。
pub mod admin;
pub mod database;
pub mod observability;
pub mod repositories;
