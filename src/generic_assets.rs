// generic_assets.rs: Embedded fallback bitmaps, one per size token

use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;





static GENERIC_16: &[u8] = include_bytes!("../assets/generic_16.png");
static GENERIC_20: &[u8] = include_bytes!("../assets/generic_20.png");
static GENERIC_48: &[u8] = include_bytes!("../assets/generic_48.png");
static GENERIC_96: &[u8] = include_bytes!("../assets/generic_96.png");





////////////////////////////////////////////////////////////////////////////////

/// One of the four embedded generic file bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenericAsset {
    Generic16,
    Generic20,
    Generic48,
    Generic96,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl GenericAsset
//
//  Selection by size token and access to the embedded PNG bytes.
//
////////////////////////////////////////////////////////////////////////////////

impl GenericAsset {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  for_size_token
    //
    //  Tokens outside the fixed four map to the 16px asset.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn for_size_token(size_token: &str) -> GenericAsset {
        match size_token {
            "icon20" => GenericAsset::Generic20,
            "icon48" => GenericAsset::Generic48,
            "icon96" => GenericAsset::Generic96,
            _        => GenericAsset::Generic16,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  bytes
    //
    //  Raw PNG file contents.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn bytes(&self) -> &'static [u8] {
        match self {
            GenericAsset::Generic16 => GENERIC_16,
            GenericAsset::Generic20 => GENERIC_20,
            GenericAsset::Generic48 => GENERIC_48,
            GenericAsset::Generic96 => GENERIC_96,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  pixel_size
    //
    //  Edge length of the square bitmap, in pixels.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn pixel_size(&self) -> u32 {
        match self {
            GenericAsset::Generic16 => 16,
            GenericAsset::Generic20 => 20,
            GenericAsset::Generic48 => 48,
            GenericAsset::Generic96 => 96,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  data_uri
    //
    //  "data:image/png;base64,..." form, usable directly as an image source.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(self.bytes()))
    }
}
