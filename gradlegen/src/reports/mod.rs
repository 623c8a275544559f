//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an
//! [`Output`](output::Output) target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, PreviewReport};
pub use output::{Report, TerminalOutput};
