use crate::PenFactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the abstract product type. Never constructible.
pub const ABSTRACT_PEN: &str = "Pen";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenKind {
    #[serde(rename = "ballpoint")]
    Ballpoint,
    #[serde(rename = "feather")]
    Feather,
}

impl PenKind {
    pub const ALL: [PenKind; 2] = [PenKind::Ballpoint, PenKind::Feather];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ballpoint => "BallpointPen",
            Self::Feather => "FeatherPen",
        }
    }
}

impl fmt::Display for PenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for PenKind {
    type Error = PenFactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case(ABSTRACT_PEN) {
            return Err(PenFactoryError::abstract_instantiation(ABSTRACT_PEN));
        }
        match value.to_lowercase().as_str() {
            "ballpointpen" | "ballpoint" => Ok(Self::Ballpoint),
            "featherpen" | "feather" => Ok(Self::Feather),
            _ => Err(PenFactoryError::UnknownVariant(value.to_string())),
        }
    }
}
