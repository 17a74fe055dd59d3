//! Global subscriber installation

use std::sync::Once;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the profile's default filter
pub const LOG_ENV_VAR: &str = "ROWSYNC_LOG";

/// Output profile for [`init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `rowsync=debug`
    Development,
    /// One JSON object per event, `rowsync=info`
    Production,
    /// Bare registry; tests install capture through `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter directive used when `ROWSYNC_LOG` is unset or invalid
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "rowsync=debug",
            Profile::Production => "rowsync=info",
            Profile::Test => "off",
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global tracing subscriber for `profile`.
///
/// Only the first call in a process has an effect. If the host application
/// already installed its own subscriber, that one is kept.
///
/// ```
/// use rowsync_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };

        if installed.is_err() {
            tracing::debug!(
                component = module_path!(),
                op = "logging_init",
                profile = ?profile,
                "global subscriber already set; keeping it"
            );
        }
    });
}
