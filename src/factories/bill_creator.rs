// src/factories/bill_creator.rs

use crate::{Bill, BillKind, InternetBill, MobileBill, ports::BillSystem};

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileBillCreator;

impl BillSystem for MobileBillCreator {
    fn make_bill(&self) -> Box<dyn Bill> {
        Box::new(MobileBill::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InternetBillCreator;

impl BillSystem for InternetBillCreator {
    fn make_bill(&self) -> Box<dyn Bill> {
        Box::new(InternetBill::new())
    }
}

/// Returns the bill system responsible for a bill kind.
pub fn bill_system_for(kind: BillKind) -> Box<dyn BillSystem> {
    match kind {
        BillKind::Mobile => Box::new(MobileBillCreator),
        BillKind::Internet => Box::new(InternetBillCreator),
    }
}
