mod analyze;
mod cli;
mod demo;
mod infra;
mod render;
mod session;

use afrowurldstar::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
