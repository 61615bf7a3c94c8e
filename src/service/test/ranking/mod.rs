use crate::{error::AppError, leveling::Progress, service::RankingService};
use test_utils::{builder::TestBuilder, factory};

mod top;
