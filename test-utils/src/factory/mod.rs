//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let club = factory::club::create_club(&db).await?;
//!
//!     // Create with all dependencies
//!     let (club, group, training) =
//!         factory::helpers::create_training_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let training = factory::training::TrainingFactory::new(&db)
//!     .title("Sprint drills")
//!     .detached(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `club` - Create club entities
//! - `group` - Create group and group membership entities
//! - `questionnaire` - Create questionnaire entities
//! - `training_series` - Create training series entities
//! - `training` - Create training entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod club;
pub mod group;
pub mod helpers;
pub mod questionnaire;
pub mod training;
pub mod training_series;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use club::create_club;
pub use group::{create_group, create_group_member};
pub use questionnaire::create_questionnaire;
pub use training::{create_training, create_training_group};
pub use training_series::create_series;
pub use user::create_user;
