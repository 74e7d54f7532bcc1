use pen_factory::{PenFactoryError, application::run_pen_workshop, logging};

fn main() -> Result<(), PenFactoryError> {
    logging::init();

    let stdout = std::io::stdout();
    run_pen_workshop(&mut stdout.lock())
}
