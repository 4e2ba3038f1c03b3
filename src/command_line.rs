// command_line.rs: CLI argument parsing (custom, no clap)
//
// Windows-style /switch and -switch prefixes, valued switches (/s:large,
// /a:word), long switches (--env, /catalog), trailing - disable (/j-).

use crate::config::Config;
use crate::ehm::AppError;
use crate::icon_catalog::ApplicationFamily;
use crate::icon_size::ImageSize;





// ── CommandLine struct ────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CommandLine {
    pub size:          Option<ImageSize>,
    pub application:   Option<ApplicationFamily>,
    pub paths:         Vec<String>,
    pub json_output:   bool,
    pub bare_output:   bool,
    pub show_env_help: bool,
    pub show_config:   bool,
    pub show_catalog:  bool,
    pub show_help:     bool,
    pub switch_prefix: char,
}

impl Default for CommandLine {
    fn default() -> Self {
        CommandLine {
            size:          None,
            application:   None,
            paths:         Vec::new(),
            json_output:   false,
            bare_output:   false,
            show_env_help: false,
            show_config:   false,
            show_catalog:  false,
            show_help:     false,
            switch_prefix: '-',
        }
    }
}

impl CommandLine {
    /// Parse command-line arguments into a CommandLine struct.
    /// Args should NOT include argv[0] (program name).
    pub fn parse_from<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CommandLine::default().parse_args(args)
    }

    /// Parse on top of defaults from Config (the FTICON environment variable).
    /// Env defaults are applied BEFORE command-line parsing overrides them.
    pub fn parse_with_config<I, S>(args: I, config: &Config) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cmd = CommandLine::default();
        cmd.apply_config_defaults(config);
        cmd.parse_args(args)
    }

    /// Apply switch defaults from Config.
    pub fn apply_config_defaults(&mut self, config: &Config) {
        if let Some(size) = config.default_size { self.size        = Some(size); }
        if let Some(v) = config.json_output     { self.json_output = v; }
        if let Some(v) = config.bare_output     { self.bare_output = v; }
    }

    fn parse_args<I, S>(mut self, args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg_ref in args {
            let arg = arg_ref.as_ref();
            let Some(first_char) = arg.chars().next() else {
                continue;
            };

            match first_char {
                '-' | '/' if arg.len() > 1 && !is_absolute_path(arg) => {
                    self.switch_prefix = first_char;

                    let (switch_arg, is_double_dash) = match arg.strip_prefix("--") {
                        Some(rest) => (rest, true),
                        None       => (&arg[1..], false),
                    };

                    // Reject single-dash long switches (e.g., -env)
                    if looks_like_long(switch_arg) && !is_double_dash && first_char == '-' {
                        return Err(AppError::InvalidArg(format!("Error:   unknown switch '{}'", arg)));
                    }

                    self.handle_switch(switch_arg)
                        .map_err(|_| AppError::InvalidArg(format!("Error:   invalid switch '{}'", arg)))?;
                }
                _ => {
                    // Positional argument (file path or URL)
                    self.paths.push(arg.to_string());
                }
            }
        }

        Ok(self)
    }

    /// Route a switch argument to the appropriate handler.
    fn handle_switch(&mut self, switch_arg: &str) -> Result<(), AppError> {
        if looks_like_long(switch_arg) {
            return self.handle_long_switch(switch_arg);
        }

        let ch = switch_arg.chars().next()
            .ok_or_else(|| AppError::InvalidArg(String::new()))?;

        let rest    = &switch_arg[ch.len_utf8()..];
        let disable = rest == "-";

        match ch.to_ascii_lowercase() {
            'j' if rest.is_empty() || disable => { self.json_output = !disable; Ok(()) }
            'b' if rest.is_empty() || disable => { self.bare_output = !disable; Ok(()) }
            '?' if rest.is_empty()            => { self.show_help   = true;     Ok(()) }
            's' => self.size_handler(rest),
            'a' => self.application_handler(rest),
            _   => Err(AppError::InvalidArg(String::new())),
        }
    }

    /// Handle long switches: env, config, catalog, help
    fn handle_long_switch(&mut self, switch_arg: &str) -> Result<(), AppError> {
        if switch_arg.eq_ignore_ascii_case("env") {
            self.show_env_help = true;
        } else if switch_arg.eq_ignore_ascii_case("config") {
            self.show_config = true;
        } else if switch_arg.eq_ignore_ascii_case("catalog") {
            self.show_catalog = true;
        } else if switch_arg.eq_ignore_ascii_case("help") {
            self.show_help = true;
        } else {
            return Err(AppError::InvalidArg(String::new()));
        }

        Ok(())
    }

    /// Handle /S size switch.
    /// Format: [:]<size> where size is s/m/l/n or the full name (case-insensitive)
    fn size_handler(&mut self, arg: &str) -> Result<(), AppError> {
        let value = arg.strip_prefix(':').unwrap_or(arg);

        self.size = Some(ImageSize::from_name(value)
            .ok_or_else(|| AppError::InvalidArg(String::new()))?);
        Ok(())
    }

    /// Handle /A application switch.
    /// Format: :<family name> (case-insensitive)
    fn application_handler(&mut self, arg: &str) -> Result<(), AppError> {
        let value = arg.strip_prefix(':')
            .ok_or_else(|| AppError::InvalidArg(String::new()))?;

        self.application = Some(ApplicationFamily::from_name(value)
            .ok_or_else(|| AppError::InvalidArg(String::new()))?);
        Ok(())
    }
}

/// "/dir/file.ext" is a path, not a switch.
fn is_absolute_path(arg: &str) -> bool {
    arg.starts_with('/') && arg[1..].contains('/')
}

/// Long switch: 3+ chars without ':' or '-' at position 1.
fn looks_like_long(switch_arg: &str) -> bool {
    switch_arg.len() >= 3
        && switch_arg.as_bytes().get(1) != Some(&b':')
        && switch_arg.as_bytes().get(1) != Some(&b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Boolean switches ──────────────────────────────────────────────────

    #[test]
    fn default_values() {
        let cmd = CommandLine::default();
        assert_eq!(cmd.size, None);
        assert_eq!(cmd.application, None);
        assert!(cmd.paths.is_empty());
        assert!(!cmd.json_output);
        assert!(!cmd.bare_output);
        assert!(!cmd.show_help);
        assert_eq!(cmd.switch_prefix, '-');
    }

    #[test]
    fn parse_slash_switches() {
        let cmd = CommandLine::parse_from(["/j", "/b"]).unwrap();
        assert!(cmd.json_output);
        assert!(cmd.bare_output);
        assert_eq!(cmd.switch_prefix, '/');
    }

    #[test]
    fn parse_disable_with_trailing_dash() {
        let cmd = CommandLine::parse_from(["-j", "-j-"]).unwrap();
        assert!(!cmd.json_output);
    }

    #[test]
    fn parse_help() {
        assert!(CommandLine::parse_from(["/?"]).unwrap().show_help);
        assert!(CommandLine::parse_from(["--help"]).unwrap().show_help);
    }

    #[test]
    fn parse_unknown_switch_errors() {
        assert!(CommandLine::parse_from(["/x"]).is_err());
        assert!(CommandLine::parse_from(["/jx"]).is_err());
    }

    // ── Size ──────────────────────────────────────────────────────────────

    #[test]
    fn parse_size_letter_and_name() {
        assert_eq!(CommandLine::parse_from(["/s:l"]).unwrap().size, Some(ImageSize::Large));
        assert_eq!(CommandLine::parse_from(["-s:Medium"]).unwrap().size, Some(ImageSize::Medium));
        assert_eq!(CommandLine::parse_from(["/sn"]).unwrap().size, Some(ImageSize::Normal));
    }

    #[test]
    fn parse_size_invalid_errors() {
        assert!(CommandLine::parse_from(["/s"]).is_err());
        assert!(CommandLine::parse_from(["/s:"]).is_err());
        assert!(CommandLine::parse_from(["/s:huge"]).is_err());
    }

    // ── Application ───────────────────────────────────────────────────────

    #[test]
    fn parse_application() {
        let cmd = CommandLine::parse_from(["/a:folder"]).unwrap();
        assert_eq!(cmd.application, Some(ApplicationFamily::Folder));

        let cmd = CommandLine::parse_from(["-a:PowerPoint"]).unwrap();
        assert_eq!(cmd.application, Some(ApplicationFamily::PowerPoint));
    }

    #[test]
    fn parse_application_invalid_errors() {
        assert!(CommandLine::parse_from(["/a:lotus"]).is_err());
        assert!(CommandLine::parse_from(["/a"]).is_err());
    }

    // ── Long switches ─────────────────────────────────────────────────────

    #[test]
    fn parse_long_switches() {
        assert!(CommandLine::parse_from(["--env"]).unwrap().show_env_help);
        assert!(CommandLine::parse_from(["/config"]).unwrap().show_config);
        assert!(CommandLine::parse_from(["--Catalog"]).unwrap().show_catalog);
    }

    #[test]
    fn parse_long_switch_single_dash_error() {
        assert!(CommandLine::parse_from(["-env"]).is_err());
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    #[test]
    fn parse_paths_and_switches() {
        let cmd = CommandLine::parse_from(["report.csv", "/s:l", "https://x/y.docx?web=1", "-"]).unwrap();
        assert_eq!(cmd.paths, vec!["report.csv", "https://x/y.docx?web=1", "-"]);
        assert_eq!(cmd.size, Some(ImageSize::Large));
    }

    #[test]
    fn parse_unix_absolute_path() {
        let cmd = CommandLine::parse_from(["/srv/share/plan.vsdx", "/j"]).unwrap();
        assert_eq!(cmd.paths, vec!["/srv/share/plan.vsdx"]);
        assert!(cmd.json_output);
    }

    #[test]
    fn empty_args_are_skipped() {
        let cmd = CommandLine::parse_from(["", "a.pdf"]).unwrap();
        assert_eq!(cmd.paths, vec!["a.pdf"]);
    }

    // ── Config defaults ───────────────────────────────────────────────────

    #[test]
    fn apply_config_defaults() {
        let mut config = Config::new();
        config.default_size = Some(ImageSize::Large);
        config.json_output = Some(true);

        let cmd = CommandLine::parse_with_config(["a.pdf"], &config).unwrap();

        assert_eq!(cmd.size, Some(ImageSize::Large));
        assert!(cmd.json_output);
        assert!(!cmd.bare_output);
    }

    #[test]
    fn explicit_switches_beat_config() {
        let mut config = Config::new();
        config.default_size = Some(ImageSize::Large);
        config.json_output = Some(true);

        let cmd = CommandLine::parse_with_config(["/s:m", "/j-"], &config).unwrap();

        assert_eq!(cmd.size, Some(ImageSize::Medium));
        assert!(!cmd.json_output);
    }
}
