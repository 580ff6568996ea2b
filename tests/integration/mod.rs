// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod admin_test;
pub mod helpers;
pub mod repositories_test;
pub mod rss_test;
pub mod site_test;
pub mod task_report_test;
