//! Human-readable error reports pointing into the source text.

mod printer;


pub use printer::DiagnosticsPrinter;

use crate::Error;

impl Error {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
