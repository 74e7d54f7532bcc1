use crate::{Bill, BillPayment, settle};

pub trait BillSystem {
    fn make_bill(&self) -> Box<dyn Bill>;
}

/// Fixed processing sequence for every [`BillSystem`]: create, then pay.
pub trait ProcessBill {
    fn process_bill(&self, payment: &BillPayment) -> Box<dyn Bill>;
}

impl<S: BillSystem + ?Sized> ProcessBill for S {
    fn process_bill(&self, payment: &BillPayment) -> Box<dyn Bill> {
        let mut bill = self.make_bill();
        settle(bill.as_mut(), payment);
        bill
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MobileBill;

    struct Fixed;

    impl BillSystem for Fixed {
        fn make_bill(&self) -> Box<dyn Bill> {
            Box::new(MobileBill::new())
        }
    }

    #[test]
    fn test_process_bill_pays_new_bill() {
        let bill = Fixed.process_bill(&BillPayment::new(5, 5));
        assert!(bill.is_paid());
        assert_eq!(bill.bill_type(), "Mobile");
    }

    #[test]
    fn test_each_call_starts_from_a_fresh_bill() {
        let system: &dyn BillSystem = &Fixed;
        let paid = system.process_bill(&BillPayment::new(9, 1));
        let unpaid = system.process_bill(&BillPayment::new(0, 1));
        assert!(paid.is_paid());
        assert!(!unpaid.is_paid());
    }
}
