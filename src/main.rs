// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
iced_folio - personal portfolio page

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --i18n-dir <dir>     Extra directory of Fluent .ftl files
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory for the diagnostics export
  -h, --help           Print this help

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR, ICED_FOLIO_DATA_DIR, ICED_FOLIO_IMAGEN_API_KEY,
  RUST_LOG
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        i18n_dir: optional_value(&mut args, "--i18n-dir"),
        data_dir: optional_value(&mut args, "--data-dir"),
        config_dir: optional_value(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    if !paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone()) {
        log::warn!("directory overrides were already set");
    }

    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid value for {key}: {err}");
            None
        }
    }
}
