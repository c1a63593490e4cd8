// SPDX-License-Identifier: MPL-2.0
use fimbrow_site::app::{self, paths, Flags};
use fimbrow_site::logging;

const HELP: &str = "\
FIMBROW academy landing page

USAGE:
  fimbrow_site [OPTIONS]

OPTIONS:
  -h, --help             Print this help and exit
      --lang <LOCALE>    Copy catalogue language (e.g. ko)
      --assets-dir <DIR> Directory holding the hero clips and profile pictures
      --config-dir <DIR> Directory holding settings.toml

ENVIRONMENT:
  FIMBROW_CONFIG_DIR     Same as --config-dir
  FIMBROW_ASSETS_DIR     Same as --assets-dir
  RUST_LOG               Log filter (default: fimbrow_site=info)
";

fn main() {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    logging::init();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

    if let Err(err) = app::run(flags) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
