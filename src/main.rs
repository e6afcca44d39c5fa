// SPDX-License-Identifier: MPL-2.0
use iced_stories::app::{self, paths, Flags};

fn main() -> iced::Result {
    colog::init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let source = args.opt_value_from_str("--source").unwrap_or_else(|err| {
        log::warn!("Ignoring --source: {err}");
        None
    });
    let route = args.opt_value_from_str("--route").unwrap_or_else(|err| {
        log::warn!("Ignoring --route: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        source,
        route,
        config_dir,
    })
}
