pub mod billing;
pub mod config;
pub mod pen_kind;

pub use billing::*;
pub use config::*;
pub use pen_kind::*;
