// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;

const PAGE_HITS: &str = "site_page_hits_total";

/// 单个页面的访问次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageHits {
    pub path: String,
    pub hits: u64,
}

/// 公开站点页面访问计数器
///
/// 每次成功响应按匹配的路由模板上报 `metrics` 计数，
/// 同时在进程内按请求路径累计，供管理面板展示。计数在重启后清零。
#[derive(Debug, Default)]
pub struct HitCounter {
    by_path: Mutex<HashMap<String, u64>>,
}

impl HitCounter {
    pub fn new() -> Self {
        describe_counter!(PAGE_HITS, "Successful responses served by the public site");
        Self::default()
    }

    /// 记录一次访问
    ///
    /// # 参数
    ///
    /// * `route` - 匹配的路由模板，如 `/{first}/`
    /// * `path` - 实际请求路径
    pub fn record(&self, route: &str, path: &str) {
        counter!(PAGE_HITS, "route" => route.to_string()).increment(1);
        *self.by_path.lock().entry(path.to_string()).or_insert(0) += 1;
    }

    /// 按访问次数从多到少排列，次数相同按路径排序
    pub fn snapshot(&self) -> Vec<PageHits> {
        let mut pages: Vec<PageHits> = self
            .by_path
            .lock()
            .iter()
            .map(|(path, hits)| PageHits {
                path: path.clone(),
                hits: *hits,
            })
            .collect();
        pages.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.path.cmp(&b.path)));
        pages
    }

    pub fn total(&self) -> u64 {
        self.by_path.lock().values().sum()
    }
}
