use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

use super::user;

/// A single entry in a user's exercise log.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The user this entry was logged against. An exercise belongs to
    /// exactly one user and is never re-parented.
    pub user_id: i32,
    pub description: String,
    /// Duration in minutes.
    pub duration: i32,
    /// The calendar date of the exercise, rendered as YYYY-MM-DD on output.
    pub date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
