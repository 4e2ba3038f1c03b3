// asset_selector.rs: Pick a render strategy for a ResolvedImage
//
// Priority is fixed:  CDN image  >  named brand icon  >  embedded generic asset.
// Every ResolvedImage maps to exactly one strategy; there is no failure case.

use serde::Serialize;
use tracing::debug;

use crate::generic_assets::GenericAsset;
use crate::icon_size::numeric_size;
use crate::resolver::ResolvedImage;





/// Default CDN location of the item-type images.
pub const CDN_BASE_URL: &str =
    "https://modernb.akamai.odsp.cdn.office.net/files/fabric-cdn-prod_20210703.001/assets/item-types";

/// Prefix of each class in a brand icon style key.
pub const BRAND_ICON_STYLE_PREFIX: &str = "ms-BrandIcon--";





////////////////////////////////////////////////////////////////////////////////

/// How an icon should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Remote PNG on the CDN.
    CdnImage { url: String },

    /// Brand icon from an external stylesheet.
    NamedIcon { icon_name: String, style_key: String },

    /// One of the embedded generic bitmaps.
    GenericAsset { asset: GenericAsset, size_token: String },
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl RenderStrategy
//
////////////////////////////////////////////////////////////////////////////////

impl RenderStrategy {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  tier_name
    //
    //  Short label used by the displayers.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn tier_name(&self) -> &'static str {
        match self {
            RenderStrategy::CdnImage { .. }     => "cdn",
            RenderStrategy::NamedIcon { .. }    => "brand",
            RenderStrategy::GenericAsset { .. } => "generic",
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  target
    //
    //  The thing a renderer consumes: URL, style key, or data URI.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn target(&self) -> String {
        match self {
            RenderStrategy::CdnImage { url }             => url.clone(),
            RenderStrategy::NamedIcon { style_key, .. }  => style_key.clone(),
            RenderStrategy::GenericAsset { asset, .. }   => asset.data_uri(),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  cdn_url
//
//  <base>/<numeric size>/<cdn token>.png.  A trailing '/' on `base` is
//  dropped so overrides may be written either way.
//
////////////////////////////////////////////////////////////////////////////////

pub fn cdn_url(base: &str, size_token: &str, cdn_token: &str) -> String {
    format!("{}/{}/{}.png", base.trim_end_matches('/'), numeric_size(size_token), cdn_token)
}





////////////////////////////////////////////////////////////////////////////////
//
//  style_key
//
//  "ms-BrandIcon--<size token> ms-BrandIcon--<image token>".
//
////////////////////////////////////////////////////////////////////////////////

pub fn style_key(size_token: &str, image_token: &str) -> String {
    format!("{BRAND_ICON_STYLE_PREFIX}{size_token} {BRAND_ICON_STYLE_PREFIX}{image_token}")
}





////////////////////////////////////////////////////////////////////////////////
//
//  select_render_strategy
//
//  Select against the default CDN base.
//
////////////////////////////////////////////////////////////////////////////////

pub fn select_render_strategy(resolved: &ResolvedImage) -> RenderStrategy {
    select_render_strategy_with_base(resolved, CDN_BASE_URL)
}





////////////////////////////////////////////////////////////////////////////////
//
//  select_render_strategy_with_base
//
//  Select against an explicit CDN base.
//
////////////////////////////////////////////////////////////////////////////////

pub fn select_render_strategy_with_base(resolved: &ResolvedImage, cdn_base: &str) -> RenderStrategy {
    let strategy = if !resolved.cdn_token.is_empty() {
        RenderStrategy::CdnImage {
            url: cdn_url(cdn_base, &resolved.size_token, &resolved.cdn_token),
        }
    } else if !resolved.image_token.is_empty() {
        RenderStrategy::NamedIcon {
            icon_name: resolved.icon_name.clone(),
            style_key: style_key(&resolved.size_token, &resolved.image_token),
        }
    } else {
        RenderStrategy::GenericAsset {
            asset:      GenericAsset::for_size_token(&resolved.size_token),
            size_token: resolved.size_token.clone(),
        }
    };

    debug!(tier = strategy.tier_name(), size = %resolved.size_token, "selected render strategy");
    strategy
}
