// json.rs: JSON displayer, one pretty-printed array of result objects

use std::io::Write;

use crate::ehm::AppError;

use super::{ResultRow, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////

pub struct JsonDisplayer<W: Write> {
    out: W,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl JsonDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> JsonDisplayer<W> {
    pub fn new(out: W) -> Self {
        JsonDisplayer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for JsonDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> ResultsDisplayer for JsonDisplayer<W> {
    fn display_results(&mut self, rows: &[ResultRow]) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut self.out, rows)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
