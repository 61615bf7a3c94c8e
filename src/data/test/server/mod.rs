use crate::{
    data::server::ServerRepository, error::AppError, model::server::UpsertServerParam,
};
use test_utils::{builder::TestBuilder, factory};

mod add_experience;
mod set_levels_channel;
mod upsert;
