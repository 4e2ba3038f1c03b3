// resolver.rs: Turn a path or application family into a ResolvedImage
//
// Two request shapes share one procedure:
//   path-based   extension is extracted, lowercased, looked up in the catalog
//   family-only  the family's catalog entry is used directly
//
// CDN and image tokens fall back independently: exact token, then the
// family's first declared token, then empty.

use serde::Serialize;
use tracing::{debug, trace};

use crate::icon_catalog::{self, ApplicationFamily, CatalogEntry};
use crate::icon_size::{self, ImageSize};





////////////////////////////////////////////////////////////////////////////////

/// What the caller wants an icon for.
///
/// When both `path` and `application` are set, `path` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRequest {
    pub path:        Option<String>,
    pub application: Option<ApplicationFamily>,
    pub size:        Option<ImageSize>,
}





////////////////////////////////////////////////////////////////////////////////

/// Image and CDN tokens chosen for one catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageTokens<'a> {
    pub image_token: &'a str,
    pub cdn_token:   &'a str,
}





////////////////////////////////////////////////////////////////////////////////

/// Result of resolving one request.  Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub size_token:  String,
    pub image_token: String,
    pub cdn_token:   String,

    /// Brand icon name of the matched catalog entry; empty when nothing matched.
    pub icon_name:   String,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl IconRequest
//
//  Builders for the two request shapes.
//
////////////////////////////////////////////////////////////////////////////////

impl IconRequest {
    pub fn for_path(path: impl Into<String>, size: Option<ImageSize>) -> Self {
        IconRequest { path: Some (path.into()), application: None, size }
    }

    pub fn for_application(application: ApplicationFamily, size: Option<ImageSize>) -> Self {
        IconRequest { path: None, application: Some (application), size }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  extract_extension
//
//  Final '.'-separated segment of `path`, cut at the first '?' to drop a
//  query string.  A path without any '.' yields the whole path.  Case is
//  preserved.
//
////////////////////////////////////////////////////////////////////////////////

pub fn extract_extension(path: &str) -> &str {
    let last = path.rsplit ('.').next().unwrap_or ("");

    match last.find ('?') {
        Some (idx) => &last[..idx],
        None       => last,
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  first_or_empty
//
//  First token of a list, or "" for an empty list.
//
////////////////////////////////////////////////////////////////////////////////

fn first_or_empty(tokens: &'static [&'static str]) -> &'static str {
    tokens.first().copied().unwrap_or ("")
}





////////////////////////////////////////////////////////////////////////////////
//
//  prefer_exact
//
//  `wanted` when it appears verbatim in `tokens`, else the first token,
//  else "".
//
////////////////////////////////////////////////////////////////////////////////

fn prefer_exact<'a>(tokens: &'static [&'static str], wanted: &'a str) -> &'a str {
    if tokens.contains (&wanted) {
        wanted
    } else {
        first_or_empty (tokens)
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve_image
//
//  Choose image and CDN tokens for `entry`.  `matched_extension` is the
//  lowercased extension for path-based requests and None for family-only
//  requests.
//
////////////////////////////////////////////////////////////////////////////////

pub fn resolve_image<'a>(entry: &'static CatalogEntry, matched_extension: Option<&'a str>) -> ImageTokens<'a> {
    let cdn_tokens = entry.cdn_tokens_or_empty();

    match matched_extension {
        Some (ext) => ImageTokens {
            image_token: prefer_exact (entry.image_tokens, ext),
            cdn_token:   prefer_exact (cdn_tokens, ext),
        },
        None => ImageTokens {
            image_token: first_or_empty (entry.image_tokens),
            cdn_token:   first_or_empty (cdn_tokens),
        },
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve
//
//  Resolve a full request.  Never fails: unknown input yields empty
//  image and CDN tokens.
//
////////////////////////////////////////////////////////////////////////////////

pub fn resolve(request: &IconRequest) -> ResolvedImage {
    let size_token = icon_size::resolve_size_token (request.size);

    let mut resolved = ResolvedImage {
        size_token: size_token.to_string(),
        ..ResolvedImage::default()
    };

    if let Some (path) = &request.path {
        let ext = extract_extension (path).to_lowercase();
        trace! (path = %path, ext = %ext, "extracted extension");

        match icon_catalog::find_by_extension (&ext) {
            Some (entry) => {
                let tokens = resolve_image (entry, Some (ext.as_str()));
                debug! (ext = %ext, family = ?entry.family, image = tokens.image_token, cdn = tokens.cdn_token, "resolved by extension");
                fill (&mut resolved, entry, tokens);
            }
            None => debug! (ext = %ext, "no catalog entry for extension"),
        }
    } else if let Some (family) = request.application {
        if let Some (entry) = icon_catalog::find_by_family (family) {
            let tokens = resolve_image (entry, None);
            debug! (family = ?family, image = tokens.image_token, cdn = tokens.cdn_token, "resolved by family");
            fill (&mut resolved, entry, tokens);
        }
    }

    resolved
}





////////////////////////////////////////////////////////////////////////////////
//
//  fill
//
//  Copy chosen tokens and the entry's icon name into `resolved`.
//
////////////////////////////////////////////////////////////////////////////////

fn fill(resolved: &mut ResolvedImage, entry: &CatalogEntry, tokens: ImageTokens<'_>) {
    resolved.image_token = tokens.image_token.to_string();
    resolved.cdn_token   = tokens.cdn_token.to_string();
    resolved.icon_name   = entry.icon_name.to_string();
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////
