use crate::{
    data::player::PlayerRepository, error::AppError, model::player::UpsertPlayerParam,
};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
