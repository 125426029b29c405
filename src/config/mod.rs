pub mod user;

use std::path::PathBuf;

use crate::deploy::DeployOptions;
use crate::paths::PathExpander;

pub use user::{load_user_config, UserConfig};

/// Settings given on the command line. `None` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub templates_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub interactive: Option<bool>,
}

/// Combine command-line settings with the user config file.
///
/// Command-line values win, then the config file, then built-in defaults.
pub fn resolve_options(cli: CliOverrides, user: Option<&UserConfig>) -> DeployOptions {
    let defaults = DeployOptions::default();

    let templates_dir = cli
        .templates_dir
        .or_else(|| {
            user.and_then(|u| u.templates_dir.as_deref())
                .map(|raw| PathExpander::from_env().expand(raw))
        })
        .unwrap_or(defaults.templates_dir);

    let interactive = cli
        .interactive
        .or_else(|| user.and_then(|u| u.interactive))
        .unwrap_or(defaults.interactive);

    DeployOptions {
        templates_dir,
        dry_run: cli.dry_run,
        interactive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let options = resolve_options(CliOverrides::default(), None);
        assert_eq!(options.templates_dir, PathBuf::from("."));
        assert!(options.interactive);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_config_fills_unset_values() {
        let user = UserConfig {
            templates_dir: Some("/srv/templates".to_string()),
            interactive: Some(false),
        };
        let options = resolve_options(CliOverrides::default(), Some(&user));
        assert!(options.templates_dir.ends_with("srv/templates"));
        assert!(!options.interactive);
    }

    #[test]
    fn test_cli_wins_over_config() {
        let user = UserConfig {
            templates_dir: Some("/srv/templates".to_string()),
            interactive: Some(true),
        };
        let cli = CliOverrides {
            templates_dir: Some(PathBuf::from("local")),
            dry_run: true,
            interactive: Some(false),
        };
        let options = resolve_options(cli, Some(&user));
        assert_eq!(options.templates_dir, PathBuf::from("local"));
        assert!(!options.interactive);
        assert!(options.dry_run);
    }
}
