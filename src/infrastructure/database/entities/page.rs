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

use super::sea_orm_active_enums::SeaPageMagic;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub url_path_component: String,
    pub link_text: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub heading: String,
    #[sea_orm(column_type = "Text")]
    pub body_markup: String,
    #[sea_orm(column_type = "Text")]
    pub head_markup: String,
    #[sea_orm(column_type = "Text")]
    pub before_body_end_markup: String,
    pub magic: SeaPageMagic,
    pub sort_index: i32,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub last_modified: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
