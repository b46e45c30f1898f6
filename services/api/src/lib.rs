mod cli;
mod infra;
mod report;
mod routes;
mod server;

use role_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
