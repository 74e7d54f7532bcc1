use crate::{Pen, PenFactoryError};
use std::io::Write;

/// Name of the abstract creator type. Never constructible.
pub const ABSTRACT_PEN_FACTORY: &str = "PenFactory";

/// Creator side of the pen family.
///
/// Implementors decide which [`Pen`] gets built. The surrounding business
/// logic lives in [`BusinessLogic`] and cannot be replaced by implementors.
pub trait PenFactory {
    /// Builds a fresh pen of the variant this manufacturer is bound to.
    fn make_product(&self) -> Box<dyn Pen>;
}

/// Template operation shared by every [`PenFactory`].
///
/// The blanket implementation below is the only one coherence allows, so
/// concrete manufacturers can vary `make_product` but never this sequence.
pub trait BusinessLogic {
    /// Manufactures a pen and prints its label to stdout.
    fn execute_business_logic(&self) -> Result<(), PenFactoryError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute_business_logic_into(&mut out)
    }

    /// Manufactures a pen and writes its label, newline-terminated, to `out`.
    fn execute_business_logic_into<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<(), PenFactoryError>;
}

impl<F: PenFactory + ?Sized> BusinessLogic for F {
    fn execute_business_logic_into<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<(), PenFactoryError> {
        let pen = self.make_product();
        tracing::debug!(label = pen.label(), "pen manufactured");
        writeln!(out, "{}", pen)?;
        Ok(())
    }
}
