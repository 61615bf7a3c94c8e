use crate::{data::member::MemberRepository, error::AppError, leveling::Progress};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod get_top;
mod update_progress;
