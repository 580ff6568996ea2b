// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::PageMagic;
use crate::domain::models::task_error_report::TaskErrorKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "page_magic")]
#[serde(rename_all = "snake_case")]
pub enum SeaPageMagic {
    #[sea_orm(string_value = "index")]
    Index,
    #[sea_orm(string_value = "tree")]
    Tree,
    #[sea_orm(string_value = "articles")]
    Articles,
    #[sea_orm(string_value = "generic")]
    Generic,
}

impl From<PageMagic> for SeaPageMagic {
    fn from(magic: PageMagic) -> Self {
        match magic {
            PageMagic::Index => SeaPageMagic::Index,
            PageMagic::Tree => SeaPageMagic::Tree,
            PageMagic::Articles => SeaPageMagic::Articles,
            PageMagic::Generic => SeaPageMagic::Generic,
        }
    }
}

impl From<SeaPageMagic> for PageMagic {
    fn from(magic: SeaPageMagic) -> Self {
        match magic {
            SeaPageMagic::Index => PageMagic::Index,
            SeaPageMagic::Tree => PageMagic::Tree,
            SeaPageMagic::Articles => PageMagic::Articles,
            SeaPageMagic::Generic => PageMagic::Generic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Text",
    enum_name = "task_error_kind"
)]
#[serde(rename_all = "snake_case")]
pub enum SeaTaskErrorKind {
    #[sea_orm(string_value = "misprint")]
    Misprint,
    #[sea_orm(string_value = "unclear_condition")]
    UnclearCondition,
    #[sea_orm(string_value = "wrong_check")]
    WrongCheck,
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<TaskErrorKind> for SeaTaskErrorKind {
    fn from(kind: TaskErrorKind) -> Self {
        match kind {
            TaskErrorKind::Misprint => SeaTaskErrorKind::Misprint,
            TaskErrorKind::UnclearCondition => SeaTaskErrorKind::UnclearCondition,
            TaskErrorKind::WrongCheck => SeaTaskErrorKind::WrongCheck,
            TaskErrorKind::Other => SeaTaskErrorKind::Other,
        }
    }
}

impl From<SeaTaskErrorKind> for TaskErrorKind {
    fn from(kind: SeaTaskErrorKind) -> Self {
        match kind {
            SeaTaskErrorKind::Misprint => TaskErrorKind::Misprint,
            SeaTaskErrorKind::UnclearCondition => TaskErrorKind::UnclearCondition,
            SeaTaskErrorKind::WrongCheck => TaskErrorKind::WrongCheck,
            SeaTaskErrorKind::Other => TaskErrorKind::Other,
        }
    }
}
