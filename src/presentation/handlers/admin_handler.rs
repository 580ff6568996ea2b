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

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::infrastructure::admin::{AdminError, AdminPanel, MoveDirection};
use crate::infrastructure::observability::hits::HitCounter;

/// 列出全部表名
pub async fn list_tables(Extension(panel): Extension<Arc<AdminPanel>>) -> impl IntoResponse {
    Json(json!({ "tables": panel.table_names() }))
}

pub async fn list_rows(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path(table): Path<String>,
) -> Result<Json<Vec<Value>>, AdminError> {
    Ok(Json(panel.list(&table).await?))
}

pub async fn get_row(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path((table, id)): Path<(String, Uuid)>,
) -> Result<Json<Value>, AdminError> {
    Ok(Json(panel.get(&table, id).await?))
}

pub async fn create_row(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path(table): Path<String>,
    Json(row): Json<Value>,
) -> Result<impl IntoResponse, AdminError> {
    let inserted = panel.insert(&table, row).await?;
    Ok((StatusCode::CREATED, Json(inserted)))
}

pub async fn update_row(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path((table, id)): Path<(String, Uuid)>,
    Json(row): Json<Value>,
) -> Result<Json<Value>, AdminError> {
    Ok(Json(panel.update(&table, id, row).await?))
}

pub async fn delete_row(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path((table, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, AdminError> {
    panel.delete(&table, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 上移或下移一条记录
pub async fn move_row(
    Extension(panel): Extension<Arc<AdminPanel>>,
    Path((table, id, direction)): Path<(String, Uuid, String)>,
) -> Result<Json<Value>, AdminError> {
    let direction: MoveDirection = direction.parse()?;
    Ok(Json(panel.move_row(&table, id, direction).await?))
}

/// 公开页面的访问统计
pub async fn page_hits(Extension(hits): Extension<Arc<HitCounter>>) -> impl IntoResponse {
    Json(json!({
        "total": hits.total(),
        "pages": hits.snapshot(),
    }))
}
