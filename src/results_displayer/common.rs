// common.rs: Shared display helpers used by the Normal and Bare displayers

use crate::asset_selector::RenderStrategy;
use crate::icon_catalog::ApplicationFamily;





////////////////////////////////////////////////////////////////////////////////
//
//  input_label
//
//  How a request is named in the output: the path as given, "app:<Name>"
//  for a family-only request, or "(none)".
//
////////////////////////////////////////////////////////////////////////////////

pub fn input_label(path: Option<&str>, application: Option<ApplicationFamily>) -> String {
    match (path, application) {
        (Some (path), _)        => path.to_string(),
        (None, Some (family))   => format! ("app:{}", family.name()),
        (None, None)            => "(none)".to_string(),
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  detail_text
//
//  Human-readable detail column.  Generic assets are named rather than
//  printed as a data URI.
//
////////////////////////////////////////////////////////////////////////////////

pub fn detail_text(strategy: &RenderStrategy) -> String {
    match strategy {
        RenderStrategy::GenericAsset { asset, .. } => format! ("embedded {}px", asset.pixel_size()),
        other                                      => other.target(),
    }
}
