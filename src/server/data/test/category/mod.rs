use crate::server::{data::category::CategoryRepository, model::category::SaveCategoryParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod name_taken;
