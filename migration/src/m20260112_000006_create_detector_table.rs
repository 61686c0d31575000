use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Detector::Table)
                    .if_not_exists()
                    .col(pk_auto(Detector::Id))
                    .col(integer(Detector::ExecutionId))
                    .col(string(Detector::Name))
                    .col(boolean(Detector::Passed).default(false))
                    .col(text_null(Detector::Message))
                    .col(
                        timestamp_with_time_zone(Detector::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_detector_execution_id")
                    .table(Detector::Table)
                    .col(Detector::ExecutionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Detector::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Detector {
    Table,
    Id,
    ExecutionId,
    Name,
    Passed,
    Message,
    CreatedAt,
}
