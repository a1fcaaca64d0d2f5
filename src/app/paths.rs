// SPDX-License-Identifier: MPL-2.0
//! Where the folio reads its settings and writes its diagnostics.
//!
//! Both directories resolve the same way, first match wins:
//! 1. `--config-dir` / `--data-dir`, registered through [`init_cli_overrides`]
//! 2. `ICED_FOLIO_CONFIG_DIR` / `ICED_FOLIO_DATA_DIR`, ignored when empty
//! 3. the platform directory from `dirs`, joined with `IcedFolio`

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedFolio";

pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "ICED_FOLIO_DATA_DIR";

/// File name of the diagnostics report written on exit.
pub const DIAGNOSTICS_FILE: &str = "diagnostics.json";

#[derive(Debug, Default)]
struct CliOverrides {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Registers the directory flags. Only the first call takes effect; later
/// calls return `false`.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    CLI_OVERRIDES
        .set(CliOverrides {
            config_dir: config_dir.map(PathBuf::from),
            data_dir: data_dir.map(PathBuf::from),
        })
        .is_ok()
}

/// Directory holding `settings.toml`.
pub fn config_dir() -> Option<PathBuf> {
    resolve(
        CLI_OVERRIDES.get().and_then(|cli| cli.config_dir.clone()),
        std::env::var_os(ENV_CONFIG_DIR),
        dirs::config_dir(),
    )
}

/// Directory for files the app writes, currently only the diagnostics report.
pub fn data_dir() -> Option<PathBuf> {
    resolve(
        CLI_OVERRIDES.get().and_then(|cli| cli.data_dir.clone()),
        std::env::var_os(ENV_DATA_DIR),
        dirs::data_dir(),
    )
}

pub fn diagnostics_export_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(DIAGNOSTICS_FILE))
}

fn resolve(
    cli: Option<PathBuf>,
    env: Option<OsString>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    cli.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/user/.config"))
    }

    #[test]
    fn cli_flag_wins_over_env_and_platform() {
        let resolved = resolve(
            Some(PathBuf::from("/from/cli")),
            Some(OsString::from("/from/env")),
            platform(),
        );
        assert_eq!(resolved, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn env_wins_over_platform() {
        let resolved = resolve(None, Some(OsString::from("/from/env")), platform());
        assert_eq!(resolved, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_is_ignored() {
        let resolved = resolve(None, Some(OsString::new()), platform());
        assert_eq!(resolved, Some(PathBuf::from("/home/user/.config/IcedFolio")));
    }

    #[test]
    fn platform_dir_gets_app_name() {
        assert_eq!(
            resolve(None, None, platform()),
            Some(PathBuf::from("/home/user/.config/IcedFolio"))
        );
        assert_eq!(resolve(None, None, None), None);
    }

    #[test]
    fn diagnostics_report_sits_in_data_dir() {
        if let (Some(dir), Some(report)) = (data_dir(), diagnostics_export_path()) {
            assert_eq!(report, dir.join(DIAGNOSTICS_FILE));
        }
    }
}
