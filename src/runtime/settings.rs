use crate::config::Settings;
use crate::report::Reporter;

/// Effective settings for this run.
///
/// The config file is optional: when it cannot be read or fails validation
/// the built-in defaults are used and a warning is reported.
pub fn load_settings(reporter: &dyn Reporter) -> Settings {
    let loaded = Settings::load().and_then(|s| s.validate().map(|()| s));
    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            reporter.warn(&format!("{e}, using defaults"));
            Settings::default()
        }
    }
}
