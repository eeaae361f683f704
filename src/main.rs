//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: the building graph and sector bookkeeping, pure and synchronous
//! - usecase: the solve and validate workflows, plus progress events
//! - infrastructure: traversal adapters, text input, schemas, event printing
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    sector_drives::interface::cli::run().await
}
