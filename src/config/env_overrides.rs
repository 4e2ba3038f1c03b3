// env_overrides.rs: FTICON environment variable parsing
//
// Extends impl Config with the methods that read the FTICON variable and
// apply size, CDN, and switch overrides.
//
// Format:  entry[;entry...]   where entry is a switch name (J, J-, B, B-)
//          or key=value with key Size or Cdn (case-insensitive).

use crate::environment_provider::EnvironmentProvider;
use crate::icon_size::ImageSize;

use super::{Config, ErrorInfo, ValueSource, FTICON_ENV_VAR_NAME};





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config: env var parsing methods
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_user_overrides
    //
    //  Parse the FTICON environment variable and apply each entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub(super) fn apply_user_overrides(&mut self, provider: &dyn EnvironmentProvider) {
        self.last_parse_result.errors.clear();

        let env_value = match provider.get_env_var (FTICON_ENV_VAR_NAME) {
            Some (v) => v,
            None => return,
        };

        for entry_raw in env_value.split (';') {
            let entry = entry_raw.trim();
            if entry.is_empty() {
                continue;
            }
            self.process_override_entry (entry);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_override_entry
    //
    //  Process a single entry from the FTICON env var.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_override_entry(&mut self, entry: &str) {
        // Switch prefixes (/, -, --) are not allowed in the env var
        if entry.starts_with ('/') || entry.starts_with ('-') {
            let prefix_len = if entry.starts_with ("--") { 2 } else { 1 };
            self.push_error ("Switch prefixes (/, -, --) are not allowed in env var", entry, &entry[..prefix_len]);
            return;
        }

        if is_switch_name (entry) {
            self.process_switch_override (entry);
            return;
        }

        let (key, value) = match parse_key_and_value (entry) {
            Some (kv) => kv,
            None => {
                self.push_error ("Invalid entry format (expected key = value)", entry, entry);
                return;
            }
        };

        if key.eq_ignore_ascii_case ("size") {
            self.apply_size_override (entry, value);
        } else if key.eq_ignore_ascii_case ("cdn") {
            self.apply_cdn_override (entry, value);
        } else {
            self.push_error ("Invalid key (expected Size or Cdn)", entry, key);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_size_override
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_size_override(&mut self, entry: &str, value: &str) {
        match ImageSize::from_name (value) {
            Some (size) => {
                self.default_size        = Some (size);
                self.default_size_source = ValueSource::Environment;
            }
            None => self.push_error ("Invalid size (expected small, medium, large, or normal)", entry, value),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_cdn_override
    //
    //  Only http and https bases are accepted.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_cdn_override(&mut self, entry: &str, value: &str) {
        let lower = value.to_ascii_lowercase();

        if !lower.starts_with ("https://") && !lower.starts_with ("http://") {
            self.push_error ("Invalid CDN base (expected http:// or https:// URL)", entry, value);
            return;
        }

        self.cdn_base_url    = value.trim_end_matches ('/').to_string();
        self.cdn_base_source = ValueSource::Environment;
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_switch_override
    //
    //  Look up entry in the SWITCH_MAPPINGS table (case-insensitive) and set
    //  the corresponding Option<bool> field.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_switch_override(&mut self, entry: &str) {
        for &(name, value, accessor) in SWITCH_MAPPINGS {
            if entry.eq_ignore_ascii_case (name) {
                *accessor (self) = Some (value);
                return;
            }
        }

        self.push_error ("Invalid switch (expected J or B)", entry, entry);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  push_error
    //
    //  Record a parse error, locating `invalid_text` within `entry`.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn push_error(&mut self, message: &str, entry: &str, invalid_text: &str) {
        self.last_parse_result.errors.push (ErrorInfo {
            message:             message.into(),
            entry:               entry.into(),
            invalid_text:        invalid_text.into(),
            invalid_text_offset: entry.find (invalid_text).unwrap_or (0),
        });
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  SWITCH_MAPPINGS
//
//  Table-driven switch dispatch.  Each entry maps a name
//  (case-insensitive) to a boolean value and a field accessor.
//
////////////////////////////////////////////////////////////////////////////////

type SwitchAccessor = fn(&mut Config) -> &mut Option<bool>;

const SWITCH_MAPPINGS: &[(&str, bool, SwitchAccessor)] = &[
    ("j",  true,  |c| &mut c.json_output),
    ("j-", false, |c| &mut c.json_output),
    ("b",  true,  |c| &mut c.bare_output),
    ("b-", false, |c| &mut c.bare_output),
];





////////////////////////////////////////////////////////////////////////////////
//
//  is_switch_name
//
////////////////////////////////////////////////////////////////////////////////

fn is_switch_name(entry: &str) -> bool {
    SWITCH_MAPPINGS.iter().any (|&(name, _, _)| entry.eq_ignore_ascii_case (name))
}





////////////////////////////////////////////////////////////////////////////////
//
//  parse_key_and_value
//
//  Split an entry on '=' into key and value, trimming whitespace.
//  Either side empty is a format error.
//
////////////////////////////////////////////////////////////////////////////////

fn parse_key_and_value(entry: &str) -> Option<(&str, &str)> {
    let (key, value) = entry.split_once ('=')?;
    let key   = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some ((key, value))
}
