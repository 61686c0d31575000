pub use super::detector::Entity as Detector;
pub use super::label::Entity as Label;
pub use super::permission::Entity as Permission;
pub use super::resource::Entity as Resource;
pub use super::role::Entity as Role;
pub use super::role_permission::Entity as RolePermission;
