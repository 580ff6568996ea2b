// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 实体同时实现 serde，供管理面板以JSON形式读写
pub mod article;
pub mod chapter;
pub mod code_review;
pub mod code_review_candidate;
pub mod course;
pub mod lesson;
pub mod page;
pub mod sea_orm_active_enums;
pub mod task;
pub mod task_error_report;
