// src/factories/pen_manufacturer.rs

use crate::{
    BallpointPen, FeatherPen, Pen, PenFactoryError, PenKind,
    ports::{ABSTRACT_PEN_FACTORY, PenFactory},
};

/// Manufacturer bound to [`BallpointPen`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BallpointPenManufacturer;

impl PenFactory for BallpointPenManufacturer {
    fn make_product(&self) -> Box<dyn Pen> {
        Box::new(BallpointPen)
    }
}

/// Manufacturer bound to [`FeatherPen`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatherPenManufacturer;

impl PenFactory for FeatherPenManufacturer {
    fn make_product(&self) -> Box<dyn Pen> {
        Box::new(FeatherPen)
    }
}

/// Returns the manufacturer bound to a pen kind.
pub fn manufacturer_for(kind: PenKind) -> Box<dyn PenFactory> {
    match kind {
        PenKind::Ballpoint => Box::new(BallpointPenManufacturer),
        PenKind::Feather => Box::new(FeatherPenManufacturer),
    }
}

/// Resolves a manufacturer by type name.
///
/// Accepts either the manufacturer name (`"FeatherPenManufacturer"`) or the
/// name of the pen it produces (`"FeatherPen"`).
///
/// # Errors
/// * `AbstractInstantiation` - `name` refers to the abstract creator or product
/// * `UnknownVariant` - `name` matches no concrete type
pub fn manufacturer_by_name(name: &str) -> Result<Box<dyn PenFactory>, PenFactoryError> {
    if name.eq_ignore_ascii_case(ABSTRACT_PEN_FACTORY) {
        return Err(PenFactoryError::abstract_instantiation(ABSTRACT_PEN_FACTORY));
    }

    let pen_name = name
        .strip_suffix("Manufacturer")
        .or_else(|| name.strip_suffix("manufacturer"))
        .unwrap_or(name);

    if pen_name.is_empty() {
        return Err(PenFactoryError::UnknownVariant(name.to_string()));
    }

    PenKind::try_from(pen_name).map(manufacturer_for)
}
