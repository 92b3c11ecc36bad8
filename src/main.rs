// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::toast::Position;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
        position: args
            .opt_value_from_str::<_, Position>("--position")
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring --position");
                None
            }),
        duration_ms: args.opt_value_from_str("--duration").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --duration");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "unrecognized arguments");
    }

    tracing::info!("starting toast demo");
    app::run(flags)
}
