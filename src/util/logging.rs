use anyhow::Result;
use env_logger::Env;

/// Initialize the logging system.
///
/// `RUST_LOG` always wins when set; otherwise the `verbose` flag selects
/// the default filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        "warn,drumkit=debug"
    } else {
        "warn,drumkit=info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
