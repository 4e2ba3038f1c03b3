// normal.rs: Normal format displayer, one aligned row per request
//
//   <input>  <tier>  <detail>

use std::io::Write;

use crate::ehm::AppError;

use super::common::detail_text;
use super::{ResultRow, ResultsDisplayer};





/// Width of the tier column ("generic" is the longest label).
const TIER_WIDTH: usize = 7;





////////////////////////////////////////////////////////////////////////////////

pub struct NormalDisplayer<W: Write> {
    out: W,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl NormalDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> NormalDisplayer<W> {
    pub fn new(out: W) -> Self {
        NormalDisplayer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for NormalDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> ResultsDisplayer for NormalDisplayer<W> {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Input column is padded to the longest input so tiers line up.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, rows: &[ResultRow]) -> Result<(), AppError> {
        let input_width = rows.iter()
            .map (|row| row.input.chars().count())
            .max()
            .unwrap_or (0);

        for row in rows {
            writeln! (
                self.out,
                "{:<input_width$}  {:<TIER_WIDTH$}  {}",
                row.input,
                row.strategy.tier_name(),
                detail_text (&row.strategy),
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
