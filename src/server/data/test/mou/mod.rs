use crate::{
    model::status::{MouDecision, MouParty, MouStatus},
    server::data::mou::MouRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_approval;
mod upsert;
