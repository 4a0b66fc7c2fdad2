// SPDX-License-Identifier: MPL-2.0
use swatchbook::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Swatchbook - browse the pillowcase catalog

USAGE:
  swatchbook [OPTIONS]

OPTIONS:
  --lang <id>             UI language (e.g. en-US, fr)
  --manifest <url|path>   Catalog manifest to load
  --image-base <url|dir>  Where slide pictures are fetched from
  --config-dir <dir>      Directory holding settings.toml
  -h, --help              Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        manifest: opt_value(&mut args, "--manifest"),
        image_base: opt_value(&mut args, "--image-base"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid option");
            None
        }
    }
}
