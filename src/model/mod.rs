//! Domain models and operation-specific parameter types.
//!
//! Repositories accept the parameter types defined here and return the domain
//! models, converting SeaORM entity models at the repository boundary.

pub mod detector;
pub mod label;
pub mod permission;
pub mod role;
pub mod status;

pub use entity::sea_orm_active_enums::{ActionName, LabelCategory, Status};
