// src/ports/mod.rs

pub use bill_system::{BillSystem, ProcessBill};
pub use pen_factory::{ABSTRACT_PEN_FACTORY, BusinessLogic, PenFactory};

pub mod bill_system;
pub mod pen_factory;
