// config/mod.rs: Defaults and FTICON environment variable overrides
//
// Holds the CDN base URL, the default icon size, and output switch
// defaults.  Values from the FTICON variable override the built-in
// defaults; command-line switches override both.

mod env_overrides;

use crate::asset_selector::CDN_BASE_URL;
use crate::environment_provider::{DefaultEnvironmentProvider, EnvironmentProvider};
use crate::icon_size::ImageSize;





/// Environment variable name
pub const FTICON_ENV_VAR_NAME: &str = "FTICON";





////////////////////////////////////////////////////////////////////////////////

/// Where a configured value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Default,
    Environment,
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message:              String,
    pub entry:                String,
    pub invalid_text:         String,
    pub invalid_text_offset:  usize,
}





#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ErrorInfo>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ValidationResult
//
//  Returns true if there are any validation errors.
//
////////////////////////////////////////////////////////////////////////////////

impl ValidationResult {
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty()
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct Config {
    /// Base URL for CDN item-type images (no trailing '/')
    pub cdn_base_url:        String,
    pub cdn_base_source:     ValueSource,

    /// Size used when the command line does not request one
    pub default_size:        Option<ImageSize>,
    pub default_size_source: ValueSource,

    pub json_output:         Option<bool>,
    pub bare_output:         Option<bool>,

    /// Validation results from last env var parse
    pub last_parse_result:   ValidationResult,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Default for Config
//
////////////////////////////////////////////////////////////////////////////////

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config
//
//  Configuration initialization and environment parsing.
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Built-in defaults only.  Call initialize() to apply FTICON.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        Config {
            cdn_base_url:        CDN_BASE_URL.to_string(),
            cdn_base_source:     ValueSource::Default,
            default_size:        None,
            default_size_source: ValueSource::Default,
            json_output:         None,
            bare_output:         None,
            last_parse_result:   ValidationResult::default(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  initialize
    //
    //  Apply overrides from the process environment.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn initialize(&mut self) {
        self.initialize_with_provider(&DefaultEnvironmentProvider);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  initialize_with_provider
    //
    //  Apply overrides from a specific environment provider (for testing).
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn initialize_with_provider(&mut self, provider: &dyn EnvironmentProvider) {
        self.apply_user_overrides(provider);

        for error in &self.last_parse_result.errors {
            tracing::warn!(entry = %error.entry, invalid = %error.invalid_text, "{}", error.message);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  validate_environment_variable
    //
    //  Return the validation result from the last env var parse.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn validate_environment_variable(&self) -> &ValidationResult {
        &self.last_parse_result
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment_provider::MockEnvironmentProvider;





    ////////////////////////////////////////////////////////////////////////////
    //
    //  make_config
    //
    //  Test helper: creates a Config with optional FTICON env var value.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn make_config(env_value: Option<&str>) -> Config {
        let mut config = Config::new();
        let mut mock = MockEnvironmentProvider::new();
        if let Some(val) = env_value {
            mock.set(FTICON_ENV_VAR_NAME, val);
        }
        config.initialize_with_provider(&mock);
        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  defaults_without_env
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn defaults_without_env() {
        let config = make_config(None);
        assert_eq!(config.cdn_base_url, CDN_BASE_URL);
        assert_eq!(config.cdn_base_source, ValueSource::Default);
        assert_eq!(config.default_size, None);
        assert_eq!(config.json_output, None);
        assert_eq!(config.bare_output, None);
        assert!(!config.validate_environment_variable().has_issues());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_size_override
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_size_override() {
        let config = make_config(Some("Size=large"));
        assert_eq!(config.default_size, Some(ImageSize::Large));
        assert_eq!(config.default_size_source, ValueSource::Environment);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_cdn_override_trims_trailing_slash
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_cdn_override_trims_trailing_slash() {
        let config = make_config(Some("cdn = https://mirror.local/item-types/"));
        assert_eq!(config.cdn_base_url, "https://mirror.local/item-types");
        assert_eq!(config.cdn_base_source, ValueSource::Environment);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_switches
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_switches() {
        let config = make_config(Some("J;b"));
        assert_eq!(config.json_output, Some(true));
        assert_eq!(config.bare_output, Some(true));

        let config = make_config(Some("j-;B-"));
        assert_eq!(config.json_output, Some(false));
        assert_eq!(config.bare_output, Some(false));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_invalid_size_error
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_invalid_size_error() {
        let config = make_config(Some("Size=huge"));
        let result = config.validate_environment_variable();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].invalid_text, "huge");
        assert_eq!(result.errors[0].invalid_text_offset, 5);
        assert_eq!(config.default_size, None);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_prefix_error
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_prefix_error() {
        let config = make_config(Some("/j"));
        let result = config.validate_environment_variable();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].invalid_text, "/");
        assert_eq!(config.json_output, None);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_combined_valid_and_invalid
    //
    //  Valid entries still apply when others fail.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_combined_valid_and_invalid() {
        let config = make_config(Some("J; ;Color=red;Size=m;cdn=ftp://x"));
        assert_eq!(config.json_output, Some(true));
        assert_eq!(config.default_size, Some(ImageSize::Medium));

        let errors = &config.validate_environment_variable().errors;
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].invalid_text, "Color");
        assert_eq!(errors[1].invalid_text, "ftp://x");
        assert_eq!(config.cdn_base_url, CDN_BASE_URL);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_missing_value_error
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_missing_value_error() {
        let config = make_config(Some("Size="));
        let errors = &config.validate_environment_variable().errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].entry, "Size=");
    }
}
