/*
 * Responsibility
 * - tokio runtime entry point
 * - delegates to app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    demo_api::app::run().await
}
