use crate::{
    data::ServerRepository, error::AppError, model::server::UpsertServerParam,
    service::ServerService,
};
use test_utils::{builder::TestBuilder, factory};

mod heartbeat;
mod set_levels_channel;
