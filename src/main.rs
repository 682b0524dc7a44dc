/*
 * Responsibility
 * - tokio runtime entrypoint
 * - calls app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todo_api::app::run().await
}
