use anyhow::Result;
use simple_logger::SimpleLogger;

/// Logs at info by default, `RUST_LOG` takes precedence when set.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    Ok(())
}
