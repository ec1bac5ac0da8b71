mod cli;
mod infra;
mod routes;
mod server;

use support_link::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
