// results_displayer: Output formatting for resolved icons
//
// Provides the ResultsDisplayer trait with NormalDisplayer, BareDisplayer,
// and JsonDisplayer implementations, plus a Displayer enum wrapper.
//
// Module structure:
//   mod.rs    shared types (ResultRow, ResultsDisplayer trait, Displayer enum)
//   common.rs shared helpers (input labels, detail text)
//   normal.rs NormalDisplayer: aligned input / tier / detail columns
//   bare.rs   BareDisplayer: render target only, one per line
//   json.rs   JsonDisplayer: array of result objects

mod bare;
mod common;
mod json;
mod normal;

use std::io::Write;

use serde::Serialize;

use crate::asset_selector::RenderStrategy;
use crate::command_line::CommandLine;
use crate::ehm::AppError;
use crate::resolver::ResolvedImage;

pub use self::bare::BareDisplayer;
pub use self::common::{detail_text, input_label};
pub use self::json::JsonDisplayer;
pub use self::normal::NormalDisplayer;





/// One resolved request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub input:    String,
    #[serde(flatten)]
    pub resolved: ResolvedImage,
    pub strategy: RenderStrategy,
}





/// Trait for displaying resolution results.
pub trait ResultsDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Write every row, then flush.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, rows: &[ResultRow]) -> Result<(), AppError>;
}





////////////////////////////////////////////////////////////////////////////////

/// Polymorphic displayer wrapping Normal, Bare, or Json variants.
pub enum Displayer<W: Write> {
    Normal(NormalDisplayer<W>),
    Bare(BareDisplayer<W>),
    Json(JsonDisplayer<W>),
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Displayer
//
//  Polymorphic displayer construction and writer access.
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> Displayer<W> {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create the appropriate displayer based on command-line switches.
    //  Priority: json > bare > normal.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(out: W, cmd: &CommandLine) -> Self {
        if cmd.json_output {
            Displayer::Json(JsonDisplayer::new(out))
        } else if cmd.bare_output {
            Displayer::Bare(BareDisplayer::new(out))
        } else {
            Displayer::Normal(NormalDisplayer::new(out))
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  into_inner
    //
    //  Consume the displayer and return the writer.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn into_inner(self) -> W {
        match self {
            Displayer::Normal(d) => d.into_inner(),
            Displayer::Bare(d)   => d.into_inner(),
            Displayer::Json(d)   => d.into_inner(),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for Displayer
//
//  Dispatch to the underlying displayer variant.
//
////////////////////////////////////////////////////////////////////////////////

impl<W: Write> ResultsDisplayer for Displayer<W> {
    fn display_results(&mut self, rows: &[ResultRow]) -> Result<(), AppError> {
        match self {
            Displayer::Normal(d) => d.display_results(rows),
            Displayer::Bare(d)   => d.display_results(rows),
            Displayer::Json(d)   => d.display_results(rows),
        }
    }
}
