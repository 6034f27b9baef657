#![doc(test(attr(deny(warnings))))]

//! Pennywise is a line-command personal finance ledger: it parses commands such
//! as `addIncome pocket money /amt 200`, keeps income and expense statements in
//! memory, and renders summaries for the shell to print.

pub mod cli;
pub mod clock;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod parser;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Pennywise tracing initialized.");
    });
}
