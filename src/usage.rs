// usage.rs: Help screen, env-var help, config display, catalog listing

use std::io::{self, Write};

use crate::asset_selector::CDN_BASE_URL;
use crate::config::{Config, ValueSource, FTICON_ENV_VAR_NAME};
use crate::icon_catalog::CATALOG;
use crate::icon_size::{resolve_size_token, SIZE_TABLE};





////////////////////////////////////////////////////////////////////////////////

pub const VERSION_STRING:    &str = env!("CARGO_PKG_VERSION");
pub const VERSION_YEAR:      &str = env!("FTICON_VERSION_YEAR");
pub const BUILD_TIMESTAMP:   &str = env!("FTICON_BUILD_TIMESTAMP");

pub const COPYRIGHT:         char = '\u{00A9}';  // ©
pub const OVERLINE:          char = '\u{203E}';  // ‾





////////////////////////////////////////////////////////////////////////////////
//
//  architecture
//
//  Returns the current CPU architecture as a display string.
//
////////////////////////////////////////////////////////////////////////////////

fn architecture() -> &'static str {
    if cfg!(target_arch = "x86_64") {
        "x64"
    } else if cfg!(target_arch = "aarch64") {
        "ARM64"
    } else if cfg!(target_arch = "x86") {
        "x86"
    } else {
        "unknown"
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_powershell
//
//  Check whether the current shell is PowerShell.
//
////////////////////////////////////////////////////////////////////////////////

fn is_powershell() -> bool {
    std::env::var("PSModulePath").is_ok()
}





////////////////////////////////////////////////////////////////////////////////
//
//  source_label
//
////////////////////////////////////////////////////////////////////////////////

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default     => "default",
        ValueSource::Environment => FTICON_ENV_VAR_NAME,
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_usage
//
//  Display the main usage/help screen.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_usage(out: &mut impl Write, prefix: char) -> io::Result<()> {
    let short = if prefix == '-' { "-" } else { "/" };
    let long  = if prefix == '-' { "--" } else { "/" };
    let lpad  = if prefix == '-' { "" } else { " " };

    // Multiline string literal; source indentation = output indentation.
    writeln!(out, "\
fticon {ver} {arch} ({ts})
Copyright {copy} {year}

Resolves file names and application families to SharePoint item-type icons.

FTICON [{short}S:size] [{short}A:family] [{short}J] [{short}B] [{long}Env] [{long}Config] [{long}Catalog] [path ...]

  path        File name, path, or URL to resolve.  Only the final extension
              matters; any query string is ignored.

  {short}S          Icon size.
  size        s  small  (16px)          m  medium (48px)
              l  large  (96px)          n  normal (20px)

  {short}A          Resolve an application family (e.g. Word, PDF, Folder).
              When paths are also given, each path wins over the family.

  {short}J          Emits results as a JSON array.
  {short}B          Emits the render target only (URL, style key, or data URI).
              Trailing - disables a switch (e.g. {short}J-).

  {long}Env       {lpad}Displays {FTICON_ENV_VAR_NAME} help, syntax, and current value.
  {long}Config    {lpad}Displays the effective configuration and where each value came from.
  {long}Catalog   {lpad}Lists every application family with its extensions and tokens.",
        ver  = VERSION_STRING,
        arch = architecture(),
        ts   = BUILD_TIMESTAMP,
        copy = COPYRIGHT,
        year = VERSION_YEAR,
    )
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_help
//
//  Display FTICON environment variable help with syntax, example, and the
//  current value.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_env_var_help(out: &mut impl Write, config: &Config, raw_value: Option<&str>, prefix: char) -> io::Result<()> {
    let (syntax_cmd, syntax_suffix, example_cmd) = if is_powershell() {
        (
            format!("  $env:{FTICON_ENV_VAR_NAME} = \""),
            "\"",
            format!("  Example: $env:{FTICON_ENV_VAR_NAME} = \"Size=large;J\""),
        )
    } else {
        (
            format!("  set {FTICON_ENV_VAR_NAME}="),
            "",
            format!("  Example: set {FTICON_ENV_VAR_NAME}=Size=large;J"),
        )
    };

    writeln!(out, "
Set the {FTICON_ENV_VAR_NAME} environment variable to change the default size, CDN, or output format:
{syntax_cmd}[<Switch>] | [Size=<size>] | [Cdn=<url>][;...]{syntax_suffix}

  <Switch>    A command-line switch:
                  J        JSON output; use J- to disable
                  B        Bare output; use B- to disable

  <size>      small, medium, large, or normal (or s, m, l, n)

  <url>       http or https base for item-type images
              (default {CDN_BASE_URL})

{example_cmd}
")?;

    match raw_value {
        Some (value) => {
            writeln!(out, "  Current value: {FTICON_ENV_VAR_NAME}={value}")?;
            display_env_var_issues(out, config, prefix, false)
        }
        None => writeln!(out, "  {FTICON_ENV_VAR_NAME} environment variable is not set."),
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_current_configuration
//
//  Display effective settings with source tracking.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_current_configuration(out: &mut impl Write, config: &Config, prefix: char) -> io::Result<()> {
    display_env_var_issues(out, config, prefix, true)?;

    let size_token = resolve_size_token (config.default_size);
    let size_name = config.default_size
        .map (|size| size.name())
        .unwrap_or ("(none)");

    let on_off = |value: Option<bool>| match value {
        Some (true)  => ("on",  FTICON_ENV_VAR_NAME),
        Some (false) => ("off", FTICON_ENV_VAR_NAME),
        None         => ("off", "default"),
    };
    let (json, json_source) = on_off (config.json_output);
    let (bare, bare_source) = on_off (config.bare_output);

    writeln!(out, "\nCurrent configuration:\n")?;
    display_item_and_source(out, "CDN base",    &config.cdn_base_url, source_label (config.cdn_base_source))?;
    display_item_and_source(out, "Size",        &format!("{size_name} ({size_token})"), source_label (config.default_size_source))?;
    display_item_and_source(out, "JSON output", json, json_source)?;
    display_item_and_source(out, "Bare output", bare, bare_source)
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_item_and_source
//
////////////////////////////////////////////////////////////////////////////////

fn display_item_and_source(out: &mut impl Write, item: &str, value: &str, source: &str) -> io::Result<()> {
    const COL_ITEM:  usize = 14;
    const COL_VALUE: usize = 60;

    writeln!(out, "  {item:<COL_ITEM$}{value:<COL_VALUE$}{source}")
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_issues
//
//  Display validation errors from the FTICON env var, underlining the
//  offending text.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_env_var_issues(out: &mut impl Write, config: &Config, prefix: char, show_hint: bool) -> io::Result<()> {
    let long   = if prefix == '-' { "--" } else { "/" };
    let result = config.validate_environment_variable();

    if !result.has_issues() {
        return Ok(());
    }

    let hint = if show_hint {
        format!(" (see {}env for help)", long)
    } else {
        String::new()
    };

    writeln!(out, "\nThere are some problems with your {} environment variable{}:\n", FTICON_ENV_VAR_NAME, hint)?;

    for error in &result.errors {
        let prefix_len = 2 + error.message.len() + 5 + error.invalid_text_offset;
        let underline: String = std::iter::repeat_n(OVERLINE, error.invalid_text.chars().count()).collect();

        writeln!(out, "  {} in \"{}\"", error.message, error.entry)?;
        writeln!(out, "{:>width$}{}\n", "", underline, width = prefix_len)?;
    }

    Ok(())
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_catalog
//
//  List every catalog entry in order, then the size table.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_catalog(out: &mut impl Write) -> io::Result<()> {
    const COL_FAMILY: usize = 12;
    const COL_ICON:   usize = 22;

    writeln!(out, "\n{:<COL_FAMILY$}{:<COL_ICON$}{}", "Family", "Icon", "Extensions / image tokens / CDN tokens")?;

    for entry in CATALOG {
        let cdn = match entry.cdn_tokens {
            Some (_) => entry.cdn_tokens_or_empty().join (", "),
            None     => "(none)".to_string(),
        };

        writeln!(out, "{:<COL_FAMILY$}{:<COL_ICON$}{}", entry.family.name(), entry.icon_name, entry.extensions.join (" "))?;
        writeln!(out, "{:<w$}image: {}", "", entry.image_tokens.join (", "), w = COL_FAMILY + COL_ICON)?;
        writeln!(out, "{:<w$}cdn:   {}", "", cdn, w = COL_FAMILY + COL_ICON)?;
    }

    writeln!(out, "\nSizes:")?;

    for &(size, token) in SIZE_TABLE {
        writeln!(out, "  {:<8}{}", size.name(), token)?;
    }

    Ok(())
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment_provider::MockEnvironmentProvider;
    use crate::icon_size::ImageSize;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn config_with(env_value: &str) -> Config {
        let mut config = Config::new();
        let mut mock = MockEnvironmentProvider::new();
        mock.set(FTICON_ENV_VAR_NAME, env_value);
        config.initialize_with_provider(&mock);
        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  usage_uses_prefix
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn usage_uses_prefix() {
        let dash  = render(|o| display_usage(o, '-'));
        let slash = render(|o| display_usage(o, '/'));

        assert!(dash.contains("--Catalog"));
        assert!(dash.contains("-S:size"));
        assert!(slash.contains("/Catalog"));
        assert!(slash.contains("/S:size"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_help_reports_unset
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_help_reports_unset() {
        let config = Config::new();
        let text = render(|o| display_env_var_help(o, &config, None, '/'));
        assert!(text.contains("FTICON environment variable is not set."));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  issues_are_underlined
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn issues_are_underlined() {
        let config = config_with("Size=huge");
        let text = render(|o| display_env_var_issues(o, &config, '-', true));

        assert!(text.contains("(see --env for help)"));
        assert!(text.contains("in \"Size=huge\""));
        assert!(text.contains(&"\u{203E}".repeat(4)));
    }

    #[test]
    fn no_issues_prints_nothing() {
        let config = Config::new();
        assert!(render(|o| display_env_var_issues(o, &config, '-', true)).is_empty());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  configuration_shows_sources
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn configuration_shows_sources() {
        let config = config_with("Size=l;J");
        let text = render(|o| display_current_configuration(o, &config, '/'));

        let size_line = text.lines().find(|l| l.trim_start().starts_with("Size")).unwrap();
        assert!(size_line.contains("large (icon96)"));
        assert!(size_line.ends_with("FTICON"));

        let cdn_line = text.lines().find(|l| l.trim_start().starts_with("CDN base")).unwrap();
        assert!(cdn_line.contains(CDN_BASE_URL));
        assert!(cdn_line.ends_with("default"));

        let json_line = text.lines().find(|l| l.trim_start().starts_with("JSON output")).unwrap();
        assert!(json_line.split_whitespace().any(|w| w == "on"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  catalog_lists_every_family
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn catalog_lists_every_family() {
        let text = render(|o| display_catalog(o));

        for entry in CATALOG {
            assert!(text.contains(entry.family.name()), "missing {}", entry.family.name());
        }
        assert!(text.contains("msapp"));
        assert!(text.contains("icon96"));
        assert_eq!(ImageSize::from_name("n").map(|s| s.name()), Some("normal"));
    }
}
