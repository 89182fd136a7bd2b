// SPDX-License-Identifier: MPL-2.0
use iced_stories::app::{self, Flags};
use log::error;

const USAGE: &str = "Usage: iced_stories [--config-dir DIR] [--start N] [DECK]";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let start = args.opt_value_from_str("--start")?;
    let deck_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        config_dir,
        start,
        deck_path,
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    app::run(flags)
}
