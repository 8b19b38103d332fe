use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, QuerySelect, Set};
use serde::Serialize;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "persona")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub nationality: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    age: i32,
    nationality: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        age: Set(age),
        nationality: Set(nationality.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Rows in id order. `None` means unbounded / no skip.
pub async fn list(
    db: &DatabaseConnection,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<Vec<Model>, ModelError> {
    // SQLite rejects OFFSET without LIMIT
    let limit = match (limit, offset) {
        (None, Some(_)) => Some(i64::MAX as u64),
        (limit, _) => limit,
    };
    let rows = Entity::find()
        .order_by_asc(Column::Id)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await?;
    Ok(rows)
}

/// `(id, age)` pairs of every row whose nationality equals `nationality`, in id order.
pub async fn ages_by_nationality(
    db: &DatabaseConnection,
    nationality: &str,
) -> Result<Vec<(i32, i32)>, ModelError> {
    let rows = Entity::find()
        .select_only()
        .column(Column::Id)
        .column(Column::Age)
        .filter(Column::Nationality.eq(nationality))
        .order_by_asc(Column::Id)
        .into_tuple::<(i32, i32)>()
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}
