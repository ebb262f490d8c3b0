// SPDX-License-Identifier: MPL-2.0
use iced_switch_button::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        }),
        active: args.contains("--active"),
        disabled: args.contains("--disabled"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unknown arguments: {rest:?}");
    }

    app::run(flags)
}
