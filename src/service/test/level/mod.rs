use crate::{error::AppError, service::LevelService};
use test_utils::{builder::TestBuilder, factory};

mod set_title;
