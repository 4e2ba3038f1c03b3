// build.rs: Inject build timestamp and copyright year for the help banner.
//
// Env vars injected:
//   FTICON_VERSION_YEAR    e.g. "2026"
//   FTICON_BUILD_TIMESTAMP e.g. "Feb  9 2026 14:30"
//
// The version itself comes from CARGO_PKG_VERSION.

use chrono::{DateTime, Local};





////////////////////////////////////////////////////////////////////////////////
//
//  build_timestamp
//
//  Formats the given local time as a build timestamp string.
//
////////////////////////////////////////////////////////////////////////////////

fn build_timestamp(now: &DateTime<Local>) -> String {
    now.format("%b %e %Y %H:%M").to_string()
}





////////////////////////////////////////////////////////////////////////////////
//
//  current_year
//
//  Returns the year of the given local time as a four-digit string.
//
////////////////////////////////////////////////////////////////////////////////

fn current_year(now: &DateTime<Local>) -> String {
    now.format("%Y").to_string()
}





////////////////////////////////////////////////////////////////////////////////
//
//  emit_env_vars
//
//  Emits cargo:rustc-env directives for timestamp and year.
//
////////////////////////////////////////////////////////////////////////////////

fn emit_env_vars(timestamp: &str, year: &str) {
    println!("cargo:rustc-env=FTICON_VERSION_YEAR={year}");
    println!("cargo:rustc-env=FTICON_BUILD_TIMESTAMP={timestamp}");
}





////////////////////////////////////////////////////////////////////////////////
//
//  main
//
//  Entry point: samples the clock once and emits env vars.
//
////////////////////////////////////////////////////////////////////////////////

fn main() {
    let now       = Local::now();
    let timestamp = build_timestamp(&now);
    let year      = current_year(&now);



    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets");

    emit_env_vars(&timestamp, &year);
}
