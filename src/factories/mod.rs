// src/factories/mod.rs

mod bill_creator;
mod pen_manufacturer;

pub use bill_creator::{InternetBillCreator, MobileBillCreator, bill_system_for};
pub use pen_manufacturer::{
    BallpointPenManufacturer, FeatherPenManufacturer, manufacturer_by_name, manufacturer_for,
};

use crate::ports::PenFactory;

/// The concrete pen manufacturers shipped with the crate.
pub struct Factories {
    ballpoint: BallpointPenManufacturer,
    feather: FeatherPenManufacturer,
}

impl Factories {
    pub fn new() -> Self {
        Self {
            ballpoint: BallpointPenManufacturer,
            feather: FeatherPenManufacturer,
        }
    }

    pub fn ballpoint(&self) -> &BallpointPenManufacturer {
        &self.ballpoint
    }

    pub fn feather(&self) -> &FeatherPenManufacturer {
        &self.feather
    }

    /// All manufacturers, in driver order.
    pub fn manufacturers(&self) -> [&dyn PenFactory; 2] {
        [&self.ballpoint, &self.feather]
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new()
    }
}
