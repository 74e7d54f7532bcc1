pub mod bill;
pub mod pen;

pub use bill::*;
pub use pen::*;
