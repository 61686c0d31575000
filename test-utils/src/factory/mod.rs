//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has its own module with a `Factory` struct
//! for customization and a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let label = factory::label::create_label(&db).await?;
//! let (resource, permission) = factory::helpers::create_permission_with_resource(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::label::LabelFactory;
//!
//! let label = LabelFactory::new(&db)
//!     .key("env")
//!     .value("prod")
//!     .usage_count(10)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `label` - Create label entities
//! - `resource` - Create resource entities
//! - `permission` - Create permission entities
//! - `role` - Create role entities
//! - `role_permission` - Grant permissions to roles
//! - `detector` - Create detector result entities
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod detector;
pub mod helpers;
pub mod label;
pub mod permission;
pub mod resource;
pub mod role;
pub mod role_permission;

// Re-export commonly used factory functions for concise usage
pub use detector::create_detector_result;
pub use label::create_label;
pub use permission::create_permission;
pub use resource::create_resource;
pub use role::create_role;
pub use role_permission::create_role_permission;
