use std::io;

use anyhow::Result;
use tracing::info;

use dammen_protocol::ProtocolEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("dammen starting");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ProtocolEngine::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
