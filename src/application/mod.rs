// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 表单DTO及其校验，以及协调领域仓库完成访客提交的用例
pub mod dto;
pub mod use_cases;
