pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_resource_table;
mod m20260105_000002_create_permission_table;
mod m20260105_000003_create_role_table;
mod m20260105_000004_create_role_permission_table;
mod m20260112_000005_create_label_table;
mod m20260112_000006_create_detector_table;

pub use m20260112_000005_create_label_table::LABEL_KEY_VALUE_INDEX;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_resource_table::Migration),
            Box::new(m20260105_000002_create_permission_table::Migration),
            Box::new(m20260105_000003_create_role_table::Migration),
            Box::new(m20260105_000004_create_role_permission_table::Migration),
            Box::new(m20260112_000005_create_label_table::Migration),
            Box::new(m20260112_000006_create_detector_table::Migration),
        ]
    }
}
