use crate::{Bill, PenFactoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillKind {
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "internet")]
    Internet,
}

impl BillKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Internet => "Internet",
        }
    }
}

impl fmt::Display for BillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for BillKind {
    type Error = PenFactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "mobile" | "phone" => Ok(Self::Mobile),
            "internet" | "broadband" => Ok(Self::Internet),
            "bill" | "billsystem" => Err(PenFactoryError::abstract_instantiation(value)),
            _ => Err(PenFactoryError::validation(format!(
                "Invalid bill kind: '{}'. Use 'mobile' or 'internet'",
                value
            ))),
        }
    }
}

/// Input for a single payment attempt.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillPayment {
    pub money_amount: u64,
    pub debt: u64,
}

impl BillPayment {
    pub fn new(money_amount: u64, debt: u64) -> Self {
        Self { money_amount, debt }
    }

    pub fn covers_debt(&self) -> bool {
        self.money_amount >= self.debt
    }
}

/// Printable outcome of a processed bill.
#[derive(Debug)]
pub struct BillStatement {
    bill: Box<dyn Bill>,
}

impl BillStatement {
    pub fn new(bill: Box<dyn Bill>) -> Self {
        Self { bill }
    }

    pub fn bill(&self) -> &dyn Bill {
        self.bill.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.bill.is_paid()
    }
}

impl fmt::Display for BillStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bill_type = self.bill.bill_type();
        if self.bill.is_paid() {
            write!(f, "{} bill is paid!", bill_type)
        } else {
            write!(f, "Not enough money to pay the {} bill!", bill_type)
        }
    }
}
