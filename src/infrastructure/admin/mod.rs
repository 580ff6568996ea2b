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

//! 管理面板
//!
//! 以JSON形式对九张内容表做增删改查和排序调整。
//! 课程、章节、课时、练习题表写入成功后刷新课程树缓存。

pub mod entity_crud;

use crate::domain::services::course_tree_cache::CourseTreeCache;
use crate::infrastructure::database::entities::{
    article, chapter, code_review, code_review_candidate, course, lesson, page, task,
    task_error_report,
};
use async_trait::async_trait;
use entity_crud::EntityCrud;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// 管理面板错误类型
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 排序调整方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl FromStr for MoveDirection {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            other => Err(AdminError::BadRequest(format!(
                "unknown direction: {}",
                other
            ))),
        }
    }
}

/// 管理面板中的一张表
#[async_trait]
pub trait CrudTable: Send + Sync {
    /// 表名
    fn name(&self) -> &'static str;

    /// 写入后是否需要刷新课程树
    fn affects_tree(&self) -> bool;

    async fn list(&self, db: &DatabaseConnection) -> Result<Vec<Value>, AdminError>;

    async fn get(&self, db: &DatabaseConnection, id: Uuid) -> Result<Option<Value>, AdminError>;

    /// 插入新记录；缺少ID时生成，创建和修改时间取当前时间
    async fn insert(&self, db: &DatabaseConnection, row: Value) -> Result<Value, AdminError>;

    /// 更新记录；ID、排序索引和创建时间不可修改
    async fn update(
        &self,
        db: &DatabaseConnection,
        id: Uuid,
        row: Value,
    ) -> Result<Option<Value>, AdminError>;

    async fn delete(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, AdminError>;

    /// 与同一父节点下相邻的记录交换排序索引
    async fn move_row(
        &self,
        db: &DatabaseConnection,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Option<Value>, AdminError>;
}

/// 管理面板
pub struct AdminPanel {
    db: Arc<DatabaseConnection>,
    tree: Arc<CourseTreeCache>,
    tables: Vec<Box<dyn CrudTable>>,
}

impl AdminPanel {
    /// 创建管理面板并注册全部内容表
    pub fn new(db: Arc<DatabaseConnection>, tree: Arc<CourseTreeCache>) -> Self {
        let tables: Vec<Box<dyn CrudTable>> = vec![
            Box::new(EntityCrud::<task::ActiveModel>::new("task", Some("lesson_id"), true)),
            Box::new(EntityCrud::<lesson::ActiveModel>::new("lesson", Some("chapter_id"), true)),
            Box::new(EntityCrud::<chapter::ActiveModel>::new("chapter", Some("course_id"), true)),
            Box::new(EntityCrud::<course::ActiveModel>::new("course", None, true)),
            Box::new(EntityCrud::<article::ActiveModel>::new("article", None, false)),
            Box::new(EntityCrud::<page::ActiveModel>::new("page", None, false)),
            Box::new(EntityCrud::<task_error_report::ActiveModel>::new(
                "task_error_report",
                None,
                false,
            )),
            Box::new(EntityCrud::<code_review_candidate::ActiveModel>::new(
                "code_review_candidate",
                None,
                false,
            )),
            Box::new(EntityCrud::<code_review::ActiveModel>::new(
                "code_review",
                None,
                false,
            )),
        ];
        Self { db, tree, tables }
    }

    /// 全部表名，按注册顺序
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name()).collect()
    }

    fn table(&self, name: &str) -> Result<&dyn CrudTable, AdminError> {
        self.tables
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
            .ok_or_else(|| AdminError::NotFound(format!("table {}", name)))
    }

    pub async fn list(&self, table: &str) -> Result<Vec<Value>, AdminError> {
        self.table(table)?.list(&self.db).await
    }

    pub async fn get(&self, table: &str, id: Uuid) -> Result<Value, AdminError> {
        self.table(table)?
            .get(&self.db, id)
            .await?
            .ok_or_else(|| AdminError::NotFound(format!("{} {}", table, id)))
    }

    pub async fn insert(&self, table: &str, row: Value) -> Result<Value, AdminError> {
        let crud = self.table(table)?;
        let inserted = crud.insert(&self.db, row).await?;
        info!("Admin inserted a row into {}", table);
        self.after_write(crud).await;
        Ok(inserted)
    }

    pub async fn update(&self, table: &str, id: Uuid, row: Value) -> Result<Value, AdminError> {
        let crud = self.table(table)?;
        let updated = crud
            .update(&self.db, id, row)
            .await?
            .ok_or_else(|| AdminError::NotFound(format!("{} {}", table, id)))?;
        info!("Admin updated {} {}", table, id);
        self.after_write(crud).await;
        Ok(updated)
    }

    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), AdminError> {
        let crud = self.table(table)?;
        if !crud.delete(&self.db, id).await? {
            return Err(AdminError::NotFound(format!("{} {}", table, id)));
        }
        info!("Admin deleted {} {}", table, id);
        self.after_write(crud).await;
        Ok(())
    }

    pub async fn move_row(
        &self,
        table: &str,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Value, AdminError> {
        let crud = self.table(table)?;
        let moved = crud
            .move_row(&self.db, id, direction)
            .await?
            .ok_or_else(|| AdminError::NotFound(format!("{} {}", table, id)))?;
        self.after_write(crud).await;
        Ok(moved)
    }

    async fn after_write(&self, crud: &dyn CrudTable) {
        if !crud.affects_tree() {
            return;
        }
        // 刷新失败时缓存保留旧快照，写入本身已成功
        if let Err(e) = self.tree.reload().await {
            warn!("Course tree not refreshed after {} write: {}", crud.name(), e);
        }
    }
}
