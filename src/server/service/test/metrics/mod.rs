use crate::server::{error::AppError, service::metrics::MetricsService};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod campaign;
mod influencer;
