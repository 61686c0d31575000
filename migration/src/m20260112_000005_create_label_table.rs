use sea_orm_migration::{prelude::*, schema::*};

/// Name of the unique index backing the `(label_key, label_value)` natural key.
///
/// Batch upserts resolve conflicts against this index.
pub const LABEL_KEY_VALUE_INDEX: &str = "idx_key_value_unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Label::Table)
                    .if_not_exists()
                    .col(pk_auto(Label::Id))
                    .col(string(Label::LabelKey))
                    .col(string(Label::LabelValue))
                    .col(text(Label::Description).default(""))
                    .col(string_len(Label::Category, 32).default("custom"))
                    .col(boolean(Label::IsSystem).default(false))
                    .col(big_integer(Label::UsageCount).default(0))
                    .col(string_len(Label::Status, 16).default("enabled"))
                    .col(
                        timestamp_with_time_zone(Label::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Label::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Label::UsageCount).gte(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(LABEL_KEY_VALUE_INDEX)
                    .table(Label::Table)
                    .col(Label::LabelKey)
                    .col(Label::LabelValue)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_labels_category")
                    .table(Label::Table)
                    .col(Label::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Label::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Label {
    #[sea_orm(iden = "labels")]
    Table,
    Id,
    LabelKey,
    LabelValue,
    Description,
    Category,
    IsSystem,
    UsageCount,
    Status,
    CreatedAt,
    UpdatedAt,
}
