pub mod parse;
pub mod progress_bar;
