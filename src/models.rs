use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, PickFirst, serde_as};
use utoipa::{IntoParams, ToSchema};

use crate::customer;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::traits::CRUDResource;

/// A customer as it travels over the wire.
///
/// Every field is optional so the same struct can carry form posts, JSON
/// bodies and stored rows. Requests that omit a text field store `NULL`.
/// An empty form value for `id` or `createdDate` reads as absent.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    /// Assigned by storage on insert.
    #[serde_as(deserialize_as = "PickFirst<(_, NoneAsEmptyString)>")]
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Assigned by storage on insert, never updated.
    #[serde_as(deserialize_as = "PickFirst<(_, NoneAsEmptyString)>")]
    pub created_date: Option<NaiveDateTime>,
}

/// Row mapper shared by every query that reads the `customer` table.
impl From<customer::Model> for Customer {
    fn from(row: customer::Model) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.firstname,
            last_name: row.lastname,
            gender: row.gender,
            email: row.email,
            address: row.address,
            phone: row.phone,
            created_date: Some(row.created_date),
        }
    }
}

#[async_trait]
impl CRUDResource for Customer {
    type EntityType = customer::Entity;
    type ColumnType = customer::Column;
    type ActiveModelType = customer::ActiveModel;

    const ID_COLUMN: Self::ColumnType = customer::Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "Customer";

    fn to_active_model(&self) -> customer::ActiveModel {
        customer::ActiveModel {
            firstname: Set(self.first_name.clone()),
            lastname: Set(self.last_name.clone()),
            gender: Set(self.gender.clone()),
            email: Set(self.email.clone()),
            address: Set(self.address.clone()),
            phone: Set(self.phone.clone()),
            ..Default::default()
        }
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Query parameters of the paged listing.
///
/// `cursorkey` is the zero-based offset of the first row, as handed back in
/// the previous page's `cursorKey` or `reverseCursor`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of rows per page.
    #[serde(default = "default_page_size")]
    #[param(default = 10, minimum = 0)]
    pub pagesize: u32,
    /// Offset cursor, `"0"` when absent.
    #[param(example = "20")]
    pub cursorkey: Option<String>,
}

impl PageParams {
    #[must_use]
    pub fn page_size(&self) -> u64 {
        u64::from(self.pagesize)
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Hard-coded description of the `customer` table served by the schema route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    /// Column name to column type, primary key excluded.
    pub columns: BTreeMap<String, String>,
    pub table_name: String,
    pub primary_key_name: String,
    pub primary_key_type: String,
}

impl TableSchema {
    #[must_use]
    pub fn customer() -> Self {
        let columns = [
            ("firstname", "varchar"),
            ("lastname", "varchar"),
            ("gender", "varchar"),
            ("email", "varchar"),
            ("address", "varchar"),
            ("phone", "varchar"),
            ("createdDate", "datetime"),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind.to_string()))
        .collect();

        Self {
            columns,
            table_name: "customer".to_string(),
            primary_key_name: "id".to_string(),
            primary_key_type: "long".to_string(),
        }
    }
}
