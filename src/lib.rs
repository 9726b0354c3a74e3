pub mod analysis;
pub mod batch;
pub mod config;
pub mod errors;
pub mod export;
pub mod ids;
mod runner;
pub mod seq;

use crate::errors::GenoscanError;

pub fn run() -> Result<(), GenoscanError> {
    runner::run()
}
