// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Tag under which events appear in logcat
pub const LOG_TAG: &str = "edgeproc";

/// Installs the global diagnostic sink.
///
/// On Android events go to logcat under [`LOG_TAG`]; elsewhere they are
/// formatted to stderr. Events are filtered by `RUST_LOG` when set, otherwise
/// at `info` (`debug` when `verbose`). Records from crates using the `log`
/// facade, such as the JNI bindings, are forwarded into tracing. Only the
/// first call installs anything; later calls are no-ops so the host may
/// initialize repeatedly.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    #[cfg(target_os = "android")]
    let subscriber = registry.with(paranoid_android::layer(LOG_TAG));

    #[cfg(not(target_os = "android"))]
    let subscriber = registry.with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }
    if LogTracer::init().is_err() {
        debug!("log forwarding already installed");
    }
}
