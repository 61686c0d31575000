//! SeaORM entities for the label, permission, role and detector tables.

pub mod prelude;

pub mod detector;
pub mod label;
pub mod permission;
pub mod resource;
pub mod role;
pub mod role_permission;
pub mod sea_orm_active_enums;
