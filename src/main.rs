// SPDX-License-Identifier: MPL-2.0
use gobarber::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
GoBarber

USAGE:
  gobarber [OPTIONS] [LOCATION]

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        UI language (pt-BR, en-US)
  --data-dir <PATH>      Directory holding the saved session
  --config-dir <PATH>    Directory holding settings.toml

ARGS:
  <LOCATION>             Location to open first, e.g. \"/reset-password?token=...\"
";

fn main() -> iced::Result {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        data_dir: opt_value(&mut args, "--data-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
        location: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, error = %err, "ignoring invalid option");
        None
    })
}
