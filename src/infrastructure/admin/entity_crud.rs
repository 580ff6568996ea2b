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

use super::{AdminError, CrudTable, MoveDirection};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, PrimaryKeyTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use uuid::Uuid;

type EntityOf<A> = <A as ActiveModelTrait>::Entity;
type ModelOf<A> = <EntityOf<A> as EntityTrait>::Model;
type ColumnOf<A> = <EntityOf<A> as EntityTrait>::Column;

const ID: &str = "id";
const SORT_INDEX: &str = "sort_index";
const CREATED_AT: &str = "created_at";
const LAST_MODIFIED: &str = "last_modified";

/// 基于SeaORM实体的通用表格管理
///
/// 记录以JSON对象进出，字段名与实体列名一致。
/// 约定：主键列为 `id`（UUID），排序列为 `sort_index`，
/// 时间戳列为 `created_at` 和 `last_modified`，后三者可以不存在。
pub struct EntityCrud<A> {
    name: &'static str,
    parent: Option<&'static str>,
    affects_tree: bool,
    _active_model: PhantomData<fn() -> A>,
}

impl<A> EntityCrud<A>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    ModelOf<A>: IntoActiveModel<A> + Serialize + DeserializeOwned,
    <<EntityOf<A> as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    /// 创建表格管理
    ///
    /// # 参数
    ///
    /// * `name` - 管理面板中的表名
    /// * `parent` - 父节点外键列，调整顺序时只与同一父节点下的记录交换
    /// * `affects_tree` - 写入后是否需要刷新课程树
    pub fn new(name: &'static str, parent: Option<&'static str>, affects_tree: bool) -> Self {
        Self {
            name,
            parent,
            affects_tree,
            _active_model: PhantomData,
        }
    }

    fn column(name: &str) -> Option<ColumnOf<A>> {
        ColumnOf::<A>::iter().find(|c| c.as_str() == name)
    }

    fn required_column(name: &str) -> Result<ColumnOf<A>, AdminError> {
        Self::column(name).ok_or_else(|| AdminError::Internal(format!("missing column {}", name)))
    }

    fn to_json(model: &ModelOf<A>) -> Result<Value, AdminError> {
        serde_json::to_value(model).map_err(|e| AdminError::Internal(e.to_string()))
    }

    fn from_json(row: Map<String, Value>) -> Result<A, AdminError> {
        let model: ModelOf<A> = serde_json::from_value(Value::Object(row))
            .map_err(|e| AdminError::BadRequest(e.to_string()))?;
        let mut active_model = model.into_active_model();
        // 全部列标记为待写入
        for column in ColumnOf::<A>::iter() {
            active_model.reset(column);
        }
        Ok(active_model)
    }

    async fn find(&self, db: &DatabaseConnection, id: Uuid) -> Result<Option<ModelOf<A>>, AdminError> {
        Ok(EntityOf::<A>::find_by_id(id).one(db).await?)
    }

    /// 同一父节点下的下一个排序索引
    async fn next_sort_index(
        &self,
        db: &DatabaseConnection,
        row: &Map<String, Value>,
    ) -> Result<i32, AdminError> {
        let sort = Self::required_column(SORT_INDEX)?;
        let mut query = EntityOf::<A>::find().order_by_desc(sort);
        if let Some(parent) = self.parent {
            let parent_id = parse_uuid_field(row, parent)?;
            query = query.filter(Self::required_column(parent)?.eq(parent_id));
        }
        let last = match query.one(db).await? {
            Some(model) => sort_index_of(&into_object(Self::to_json(&model)?)?)?,
            None => -1,
        };
        Ok(last + 1)
    }
}

#[async_trait]
impl<A> CrudTable for EntityCrud<A>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    ModelOf<A>: IntoActiveModel<A> + Serialize + DeserializeOwned,
    <<EntityOf<A> as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn affects_tree(&self) -> bool {
        self.affects_tree
    }

    async fn list(&self, db: &DatabaseConnection) -> Result<Vec<Value>, AdminError> {
        let query = match Self::column(SORT_INDEX) {
            Some(sort) => EntityOf::<A>::find()
                .order_by_asc(sort)
                .order_by_asc(Self::required_column(ID)?),
            None => EntityOf::<A>::find().order_by_desc(Self::required_column(CREATED_AT)?),
        };
        query
            .all(db)
            .await?
            .iter()
            .map(Self::to_json)
            .collect()
    }

    async fn get(&self, db: &DatabaseConnection, id: Uuid) -> Result<Option<Value>, AdminError> {
        self.find(db, id).await?.as_ref().map(Self::to_json).transpose()
    }

    async fn insert(&self, db: &DatabaseConnection, row: Value) -> Result<Value, AdminError> {
        let mut row = into_object(row)?;

        let id = match row.get(ID) {
            None | Some(Value::Null) => Uuid::new_v4(),
            Some(_) => parse_uuid_field(&row, ID)?,
        };
        row.insert(ID.to_string(), Value::String(id.to_string()));

        let now = Value::String(Utc::now().fixed_offset().to_rfc3339());
        row.insert(CREATED_AT.to_string(), now.clone());
        if Self::column(LAST_MODIFIED).is_some() {
            row.insert(LAST_MODIFIED.to_string(), now);
        }
        if Self::column(SORT_INDEX).is_some()
            && matches!(row.get(SORT_INDEX), None | Some(Value::Null))
        {
            let next = self.next_sort_index(db, &row).await?;
            row.insert(SORT_INDEX.to_string(), Value::from(next));
        }

        let inserted = Self::from_json(row)?.insert(db).await?;
        Self::to_json(&inserted)
    }

    async fn update(
        &self,
        db: &DatabaseConnection,
        id: Uuid,
        row: Value,
    ) -> Result<Option<Value>, AdminError> {
        let changes = into_object(row)?;
        let existing = match self.find(db, id).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut merged = into_object(Self::to_json(&existing)?)?;
        for (key, value) in changes {
            // 标识、排序和创建时间只读
            if key == ID || key == SORT_INDEX || key == CREATED_AT {
                continue;
            }
            merged.insert(key, value);
        }
        if Self::column(LAST_MODIFIED).is_some() {
            merged.insert(
                LAST_MODIFIED.to_string(),
                Value::String(Utc::now().fixed_offset().to_rfc3339()),
            );
        }

        let updated = Self::from_json(merged)?.update(db).await?;
        Self::to_json(&updated).map(Some)
    }

    async fn delete(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, AdminError> {
        let result = EntityOf::<A>::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn move_row(
        &self,
        db: &DatabaseConnection,
        id: Uuid,
        direction: MoveDirection,
    ) -> Result<Option<Value>, AdminError> {
        let sort = Self::column(SORT_INDEX).ok_or_else(|| {
            AdminError::BadRequest(format!("table {} has no sort order", self.name))
        })?;
        let id_column = Self::required_column(ID)?;

        let txn = db.begin().await?;

        let current = match EntityOf::<A>::find_by_id(id).one(&txn).await? {
            Some(model) => into_object(Self::to_json(&model)?)?,
            None => {
                txn.commit().await?;
                return Ok(None);
            }
        };
        let mut query = EntityOf::<A>::find();
        if let Some(parent) = self.parent {
            let parent_id = parse_uuid_field(&current, parent)?;
            query = query.filter(Self::required_column(parent)?.eq(parent_id));
        }
        // 同级按 (sort_index, id) 排序，与课程树的展示顺序一致
        let mut siblings = Vec::new();
        for model in query
            .order_by_asc(sort)
            .order_by_asc(id_column)
            .all(&txn)
            .await?
        {
            let row = into_object(Self::to_json(&model)?)?;
            siblings.push((parse_uuid_field(&row, ID)?, sort_index_of(&row)?));
        }
        let position = siblings
            .iter()
            .position(|(sibling, _)| *sibling == id)
            .ok_or_else(|| AdminError::NotFound(format!("{} {}", self.name, id)))?;
        let target = match direction {
            MoveDirection::Up => position.checked_sub(1),
            MoveDirection::Down => Some(position + 1).filter(|next| *next < siblings.len()),
        };

        // 已在边界，顺序不变
        let Some(target) = target else {
            txn.commit().await?;
            return Ok(Some(Value::Object(current)));
        };

        let (neighbour_id, neighbour_index) = siblings[target];
        let current_index = siblings[position].1;
        let distinct = siblings.windows(2).all(|pair| pair[0].1 < pair[1].1);
        let updates = if !distinct {
            // 存在相同序号时交换无法改变顺序，按新顺序整体重排
            let base = siblings[0].1;
            siblings.swap(position, target);
            siblings
                .iter()
                .enumerate()
                .map(|(offset, (sibling, old))| (*sibling, *old, base + offset as i32))
                .filter(|(_, old, new)| old != new)
                .map(|(sibling, _, new)| (sibling, new))
                .collect::<Vec<_>>()
        } else {
            vec![(id, neighbour_index), (neighbour_id, current_index)]
        };

        for (row_id, index) in updates {
            EntityOf::<A>::update_many()
                .col_expr(sort, Expr::value(index))
                .filter(id_column.eq(row_id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        self.get(db, id).await
    }
}

fn into_object(row: Value) -> Result<Map<String, Value>, AdminError> {
    match row {
        Value::Object(map) => Ok(map),
        _ => Err(AdminError::BadRequest("row must be a JSON object".to_string())),
    }
}

fn parse_uuid_field(row: &Map<String, Value>, field: &str) -> Result<Uuid, AdminError> {
    row.get(field)
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AdminError::BadRequest(format!("{} must be a UUID", field)))
}

fn sort_index_of(row: &Map<String, Value>) -> Result<i32, AdminError> {
    row.get(SORT_INDEX)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| AdminError::Internal("sort_index is not an integer".to_string()))
}
