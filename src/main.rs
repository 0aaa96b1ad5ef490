use std::io;

use anyhow::Result;
use horsy_board::Session;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "horsy starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
