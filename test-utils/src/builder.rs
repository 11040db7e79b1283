use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Brand};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Brand)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and onboarding profile tables.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Category
    /// - Brand
    /// - Influencer
    pub fn with_profile_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Brand)
            .with_table(Influencer)
    }

    /// Adds all tables required for campaign operations.
    ///
    /// Adds the profile tables followed by:
    /// - Platform
    /// - Service
    /// - PlatformAccount
    /// - Campaign
    /// - CampaignService
    /// - CampaignInvitation
    /// - Notification
    ///
    /// Notifications are included because most campaign workflows notify someone.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_campaign_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_campaign_tables(self) -> Self {
        self.with_profile_tables()
            .with_table(Platform)
            .with_table(Service)
            .with_table(PlatformAccount)
            .with_table(Campaign)
            .with_table(CampaignService)
            .with_table(CampaignInvitation)
            .with_table(Notification)
    }

    /// Adds every table of the application schema.
    ///
    /// Equivalent to `with_campaign_tables()` plus the MOU and metric tables.
    pub fn with_all_tables(self) -> Self {
        self.with_campaign_tables()
            .with_table(Mou)
            .with_table(MouApproval)
            .with_table(InfluencerMetric)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
