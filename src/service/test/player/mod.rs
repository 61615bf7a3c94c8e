use crate::{error::AppError, model::player::UpsertPlayerParam, service::PlayerService};
use test_utils::{builder::TestBuilder, factory};

mod register;
