use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table. The unique key on username is the
        // store-level guarantee that duplicate registrations lose the
        // race instead of both succeeding.
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create exercises table
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(pk_auto(Exercises::Id))
                    .col(integer(Exercises::UserId))
                    .col(string(Exercises::Description))
                    .col(integer(Exercises::Duration))
                    .col(date(Exercises::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_user")
                            .from(Exercises::Table, Exercises::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the per-user log lookup with date filtering.
        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_user_date")
                    .table(Exercises::Table)
                    .col(Exercises::UserId)
                    .col(Exercises::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
}

#[derive(DeriveIden)]
enum Exercises {
    Table,
    Id,
    UserId,
    Description,
    Duration,
    Date,
}
