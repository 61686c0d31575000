use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_resource_table::Resource;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(pk_auto(Permission::Id))
                    .col(string_uniq(Permission::Name))
                    .col(text(Permission::Description).default(""))
                    .col(string_len(Permission::Action, 32))
                    .col(integer(Permission::ResourceId))
                    .col(boolean(Permission::IsSystem).default(false))
                    .col(string_len(Permission::Status, 16).default("enabled"))
                    .col(
                        timestamp_with_time_zone(Permission::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Permission::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permissions_resource_id")
                            .from(Permission::Table, Permission::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_permissions_resource_action")
                    .table(Permission::Table)
                    .col(Permission::ResourceId)
                    .col(Permission::Action)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Permission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Permission {
    #[sea_orm(iden = "permissions")]
    Table,
    Id,
    Name,
    Description,
    Action,
    ResourceId,
    IsSystem,
    Status,
    CreatedAt,
    UpdatedAt,
}
