use crate::{
    BillStatement, BillingConfig, PenFactoryError,
    factories::{Factories, bill_system_for},
    ports::{BusinessLogic, ProcessBill},
};
use std::io::Write;

/// Runs the business logic of every shipped pen manufacturer, ballpoint first.
pub fn run_pen_workshop<W: Write + ?Sized>(out: &mut W) -> Result<(), PenFactoryError> {
    let factories = Factories::new();
    for manufacturer in factories.manufacturers() {
        manufacturer.execute_business_logic_into(out)?;
    }
    out.flush()?;
    tracing::info!("pen workshop finished");
    Ok(())
}

/// Processes every configured bill in order and writes one statement per bill.
///
/// Returns the statements so callers can inspect the outcome.
pub fn run_billing<W: Write + ?Sized>(
    config: &BillingConfig,
    out: &mut W,
) -> Result<Vec<BillStatement>, PenFactoryError> {
    let mut statements = Vec::with_capacity(config.bills.len());

    for entry in &config.bills {
        let system = bill_system_for(entry.kind);
        let bill = system.process_bill(&entry.payment());
        let statement = BillStatement::new(bill);
        writeln!(out, "{}", statement)?;
        statements.push(statement);
    }

    out.flush()?;
    tracing::info!(processed = statements.len(), "billing run finished");
    Ok(statements)
}
