use pen_factory::{BillingConfig, PenFactoryError, application::run_billing, logging};

fn main() -> Result<(), PenFactoryError> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => BillingConfig::load(path)?,
        None => BillingConfig::default(),
    };
    if args.next().is_some() {
        return Err(PenFactoryError::config("usage: bill-system [CONFIG.toml]"));
    }

    let stdout = std::io::stdout();
    run_billing(&config, &mut stdout.lock())?;
    Ok(())
}
