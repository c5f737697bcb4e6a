// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use float_chat::app::{self, paths, Flags};
use std::process::ExitCode;

const HELP: &str = "\
float_chat - floating chat support widget

USAGE:
  float_chat [OPTIONS]

OPTIONS:
  --lang <LOCALE>          UI language (e.g. en-US, fr)
  --backend-url <URL>      Chat backend base URL
  --config-dir <PATH>      Directory holding settings.toml
  --data-dir <PATH>        Directory holding the saved chat session
  -h, --help               Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
