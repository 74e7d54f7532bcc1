use crate::{BillKind, BillPayment};
use std::fmt;

/// A bill produced by a [`BillSystem`](crate::ports::BillSystem).
///
/// Unlike pens, bills carry state: they start unpaid and record the outcome
/// of the last payment attempt.
pub trait Bill: fmt::Debug {
    /// Label of the bill type, e.g. `"Mobile"`.
    fn bill_type(&self) -> &'static str;

    fn is_paid(&self) -> bool;

    /// Attempts to pay the bill. The bill counts as paid when the money on
    /// hand covers the debt.
    fn pay(&mut self, payment: &BillPayment);
}

/// Pays any concrete bill without going through a creator.
pub fn settle<B: Bill + ?Sized>(bill: &mut B, payment: &BillPayment) {
    bill.pay(payment);
    tracing::debug!(
        bill_type = bill.bill_type(),
        paid = bill.is_paid(),
        "bill settled"
    );
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileBill {
    paid: bool,
}

impl MobileBill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Bill for MobileBill {
    fn bill_type(&self) -> &'static str {
        BillKind::Mobile.label()
    }

    fn is_paid(&self) -> bool {
        self.paid
    }

    fn pay(&mut self, payment: &BillPayment) {
        self.paid = payment.covers_debt();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternetBill {
    paid: bool,
}

impl InternetBill {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Bill for InternetBill {
    fn bill_type(&self) -> &'static str {
        BillKind::Internet.label()
    }

    fn is_paid(&self) -> bool {
        self.paid
    }

    fn pay(&mut self, payment: &BillPayment) {
        self.paid = payment.covers_debt();
    }
}
