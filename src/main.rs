// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
IcedGallery: thumbnail gallery with a spinning full-size viewer

USAGE:
  iced_gallery [OPTIONS] [PATH...]

ARGS:
  [PATH...]               Image files or directories to show

OPTIONS:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory containing settings.toml
  --manifest <FILE>       TOML file listing the images to show
  -h, --help              Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let manifest: Option<PathBuf> = args.opt_value_from_str("--manifest")?;
    let paths = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        lang,
        config_dir,
        manifest,
        paths,
    }))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("Starting IcedGallery {}", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
