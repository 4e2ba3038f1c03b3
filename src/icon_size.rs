// icon_size.rs: Symbolic icon sizes and their size tokens
//
// Size tokens ("icon16", ...) are what the CDN URL and the brand icon style
// key are built from.  Anything unrecognized resolves to the small token.

use serde::Serialize;





/// Token used when no size is requested or the size is unknown.
pub const DEFAULT_SIZE_TOKEN: &str = "icon16";

/// Fixed textual prefix of every size token.
pub const SIZE_TOKEN_PREFIX: &str = "icon";





////////////////////////////////////////////////////////////////////////////////

/// Requested display size.
/// Discriminants match the numeric codes used by existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum ImageSize {
    Small  = 1,
    Medium = 2,
    Large  = 3,
    Normal = 4,
}





////////////////////////////////////////////////////////////////////////////////
//
//  SIZE_TABLE
//
//  Symbolic size to size token.
//
////////////////////////////////////////////////////////////////////////////////

pub const SIZE_TABLE: &[(ImageSize, &str)] = &[
    (ImageSize::Small,  "icon16"),
    (ImageSize::Medium, "icon48"),
    (ImageSize::Large,  "icon96"),
    (ImageSize::Normal, "icon20"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  impl ImageSize
//
//  Parsing from names and numeric codes.
//
////////////////////////////////////////////////////////////////////////////////

impl ImageSize {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_name
    //
    //  Accepts the full name or its first letter, case-insensitive
    //  ("large", "L").
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_name(name: &str) -> Option<ImageSize> {
        match name.trim().to_ascii_lowercase().as_str() {
            "s" | "small"  => Some (ImageSize::Small),
            "m" | "medium" => Some (ImageSize::Medium),
            "l" | "large"  => Some (ImageSize::Large),
            "n" | "normal" => Some (ImageSize::Normal),
            _              => None,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_code
    //
    //  Numeric code (1..=4) to size.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_code(code: u32) -> Option<ImageSize> {
        SIZE_TABLE.iter()
            .map (|&(size, _)| size)
            .find (|size| *size as u32 == code)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  name
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn name(&self) -> &'static str {
        match self {
            ImageSize::Small  => "small",
            ImageSize::Medium => "medium",
            ImageSize::Large  => "large",
            ImageSize::Normal => "normal",
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve_size_token
//
//  Size token for the requested size, or DEFAULT_SIZE_TOKEN.
//
////////////////////////////////////////////////////////////////////////////////

pub fn resolve_size_token(requested: Option<ImageSize>) -> &'static str {
    requested
        .and_then (|size| SIZE_TABLE.iter().find (|&&(s, _)| s == size))
        .map (|&(_, token)| token)
        .unwrap_or (DEFAULT_SIZE_TOKEN)
}





////////////////////////////////////////////////////////////////////////////////
//
//  numeric_size
//
//  Size token with the first "icon" removed ("icon48" -> "48").
//
////////////////////////////////////////////////////////////////////////////////

pub fn numeric_size(size_token: &str) -> String {
    size_token.replacen (SIZE_TOKEN_PREFIX, "", 1)
}
