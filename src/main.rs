// SPDX-License-Identifier: MPL-2.0
use econ_calendar::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Economic calendar card editor

USAGE:
  econ_calendar [OPTIONS] [CSV_FILE]

OPTIONS:
  -h, --help               Print this help
      --lang <ID>          UI language (en-US, th, lo)
      --config-dir <DIR>   Directory holding settings.toml
      --log-level <LEVEL>  Log filter (error, warn, info, debug, trace)

ARGS:
  <CSV_FILE>  Calendar imported on startup instead of the sample rows
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });
    let log_level: Option<String> =
        args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
            eprintln!("Ignoring --log-level: {err}");
            None
        });
    let csv_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    init_logging(log_level.as_deref());

    let flags = Flags {
        lang,
        csv_path,
        config_dir,
    };

    app::run(flags)
}

/// `--log-level` wins over `RUST_LOG`; both fall back to `info`.
fn init_logging(level: Option<&str>) {
    let filter = level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
