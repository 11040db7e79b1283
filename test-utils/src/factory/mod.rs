//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
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
//!     let admin = factory::user::create_admin(&db).await?;
//!
//!     // Create with all dependencies
//!     let (brand_user, brand, campaign) =
//!         factory::helpers::create_campaign_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let campaign = factory::campaign::CampaignFactory::new(&db, brand.id)
//!     .name("Summer Launch")
//!     .status("ACTIVE")
//!     .build()
//!     .await?;
//! ```

pub mod brand;
pub mod campaign;
pub mod category;
pub mod helpers;
pub mod influencer;
pub mod invitation;
pub mod notification;
pub mod platform;
pub mod platform_account;
pub mod service;
pub mod user;

pub use brand::create_brand;
pub use campaign::create_campaign;
pub use category::create_category;
pub use influencer::create_influencer;
pub use invitation::create_invitation;
pub use notification::create_notification;
pub use platform::{create_platform, create_platform_with_slug};
pub use platform_account::create_platform_account;
pub use service::create_service;
pub use user::{create_admin, create_brand_user, create_influencer_user, create_user};
