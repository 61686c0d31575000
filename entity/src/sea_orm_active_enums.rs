use sea_orm::entity::prelude::*;

/// Lifecycle status shared by every status-bearing table.
///
/// `Deleted` marks a soft-deleted row. Nothing in the repository layer moves a
/// row out of `Deleted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[default]
    #[sea_orm(string_value = "enabled")]
    Enabled,
    #[sea_orm(string_value = "disabled")]
    Disabled,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

/// Grouping used when presenting labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum LabelCategory {
    #[sea_orm(string_value = "system")]
    System,
    #[sea_orm(string_value = "environment")]
    Environment,
    #[sea_orm(string_value = "application")]
    Application,
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "business")]
    Business,
    #[default]
    #[sea_orm(string_value = "custom")]
    Custom,
}

/// Action a permission grants on its resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ActionName {
    #[sea_orm(string_value = "create")]
    Create,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "update")]
    Update,
    #[sea_orm(string_value = "delete")]
    Delete,
    #[sea_orm(string_value = "list")]
    List,
    #[sea_orm(string_value = "execute")]
    Execute,
    #[sea_orm(string_value = "manage")]
    Manage,
}
