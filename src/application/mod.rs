pub mod driver;

pub use driver::{run_billing, run_pen_workshop};
