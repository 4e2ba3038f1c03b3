// bare.rs: Bare format displayer, render target only
//
// One line per request: the CDN URL, the brand style key, or the generic
// asset as a data URI.  Suitable for piping.

use std::io::Write;

use crate::ehm::AppError;

use super::{ResultRow, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////

pub struct BareDisplayer<W: Write> {
    out: W,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl BareDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> BareDisplayer<W> {
    pub fn new(out: W) -> Self {
        BareDisplayer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for BareDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> ResultsDisplayer for BareDisplayer<W> {
    fn display_results(&mut self, rows: &[ResultRow]) -> Result<(), AppError> {
        for row in rows {
            writeln!(self.out, "{}", row.strategy.target())?;
        }

        self.out.flush()?;
        Ok(())
    }
}
