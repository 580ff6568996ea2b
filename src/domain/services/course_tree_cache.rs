// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::tree::CourseTree;
use crate::domain::repositories::{ContentRepositories, RepositoryError};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// 课程树缓存
///
/// 持有当前课程树的不可变快照。读者拿到 `Arc` 后不受后续刷新影响；
/// 刷新时整体替换快照，失败则保留旧快照。
/// 刷新互斥执行，后发起的刷新总是在先发起的之后替换快照。
pub struct CourseTreeCache {
    repos: ContentRepositories,
    current: RwLock<Arc<CourseTree>>,
    refresh: Mutex<()>,
}

impl CourseTreeCache {
    /// 从仓库加载课程树并创建缓存
    ///
    /// # 参数
    ///
    /// * `repos` - 内容仓库集合
    ///
    /// # 返回值
    ///
    /// * `Ok(CourseTreeCache)` - 加载成功
    /// * `Err(RepositoryError)` - 任一列表查询失败
    pub async fn load(repos: ContentRepositories) -> Result<Self, RepositoryError> {
        let tree = Self::fetch(&repos).await?;
        info!("Course tree loaded with {} nodes", tree.node_count());
        Ok(Self {
            repos,
            current: RwLock::new(Arc::new(tree)),
            refresh: Mutex::new(()),
        })
    }

    /// 当前快照
    pub fn snapshot(&self) -> Arc<CourseTree> {
        self.current.read().clone()
    }

    /// 重新加载课程树并替换快照
    ///
    /// 查询失败时保留旧快照并返回错误
    pub async fn reload(&self) -> Result<usize, RepositoryError> {
        // 查询与替换之间持锁，旧数据不会覆盖较新的快照
        let _guard = self.refresh.lock().await;
        match Self::fetch(&self.repos).await {
            Ok(tree) => {
                let count = tree.node_count();
                *self.current.write() = Arc::new(tree);
                info!("Course tree reloaded with {} nodes", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Course tree reload failed, keeping previous snapshot: {}", e);
                Err(e)
            }
        }
    }

    async fn fetch(repos: &ContentRepositories) -> Result<CourseTree, RepositoryError> {
        let (courses, chapters, lessons, tasks) = tokio::try_join!(
            repos.courses.find_all_order_by_sort_index(),
            repos.chapters.find_all_order_by_sort_index(),
            repos.lessons.find_all_order_by_sort_index(),
            repos.tasks.find_all_order_by_sort_index(),
        )?;
        Ok(CourseTree::build(courses, chapters, lessons, tasks))
    }
}
