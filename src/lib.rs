// fticon - SharePoint item-type icon resolution
// Maps file names and application families to CDN images, brand icons,
// or embedded generic assets.

pub mod ehm;
pub mod environment_provider;
pub mod icon_catalog;
pub mod icon_size;
pub mod generic_assets;
pub mod resolver;
pub mod asset_selector;
pub mod config;
pub mod command_line;
pub mod results_displayer;
pub mod usage;

use std::io::{self, Write};

use asset_selector::select_render_strategy_with_base;
use command_line::CommandLine;
use config::{Config, FTICON_ENV_VAR_NAME};
use ehm::AppError;
use environment_provider::{DefaultEnvironmentProvider, EnvironmentProvider};
use resolver::{resolve, IconRequest};
use results_displayer::{input_label, Displayer, ResultRow, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////
//
//  build_requests
//
//  One request per path, plus one for the application family when given.
//  With no inputs at all, a single empty request (generic icon).
//
////////////////////////////////////////////////////////////////////////////////

pub fn build_requests(cmd: &CommandLine) -> Vec<IconRequest> {
    let mut requests: Vec<IconRequest> = cmd.paths.iter()
        .map (|path| IconRequest::for_path (path.as_str(), cmd.size))
        .collect();

    if let Some (family) = cmd.application {
        requests.push (IconRequest::for_application (family, cmd.size));
    }

    if requests.is_empty() {
        requests.push (IconRequest { size: cmd.size, ..IconRequest::default() });
    }

    requests
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve_rows
//
//  Resolve each request and pick its render strategy against `cdn_base`.
//
////////////////////////////////////////////////////////////////////////////////

pub fn resolve_rows(requests: &[IconRequest], cdn_base: &str) -> Vec<ResultRow> {
    requests.iter()
        .map (|request| {
            let resolved = resolve (request);
            let strategy = select_render_strategy_with_base (&resolved, cdn_base);

            ResultRow {
                input: input_label (request.path.as_deref(), request.application),
                resolved,
                strategy,
            }
        })
        .collect()
}





////////////////////////////////////////////////////////////////////////////////
//
//  run
//
//  Main entry point for the library.  Called by main.rs; returns Result
//  for clean error handling.
//
////////////////////////////////////////////////////////////////////////////////

pub fn run() -> Result<(), AppError> {
    let mut config = Config::new();
    config.initialize();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let cmd = match CommandLine::parse_with_config (std::env::args().skip (1), &config) {
        Ok (cmd) => cmd,
        Err (e) => {
            usage::display_usage (&mut out, '/')?;
            out.flush()?;
            return Err (e);
        }
    };

    if cmd.show_help {
        usage::display_usage (&mut out, cmd.switch_prefix)?;
        return Ok(());
    }

    if cmd.show_env_help {
        let raw = DefaultEnvironmentProvider.get_env_var (FTICON_ENV_VAR_NAME);
        usage::display_env_var_help (&mut out, &config, raw.as_deref(), cmd.switch_prefix)?;
        return Ok(());
    }

    if cmd.show_config {
        usage::display_current_configuration (&mut out, &config, cmd.switch_prefix)?;
        return Ok(());
    }

    if cmd.show_catalog {
        usage::display_catalog (&mut out)?;
        return Ok(());
    }

    let rows = resolve_rows (&build_requests (&cmd), &config.cdn_base_url);
    tracing::debug! (count = rows.len(), "resolved requests");

    let mut displayer = Displayer::new (out, &cmd);
    displayer.display_results (&rows)
}
