//! Application configuration loaded from environment variables.

/// Default bind address: all interfaces, port 3000.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Application configuration.
///
/// `ENVIRONMENT` is not captured here; the root handler reads it on every
/// request so a changed value shows up without a restart.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `AGRARIAN_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("AGRARIAN_BIND_ADDR")
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        tracing::info!(bind_addr = %bind_addr, "configuration loaded");

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to run config tests with an isolated bind address variable.
    fn with_bind_addr<F: FnOnce()>(value: Option<&str>, f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();
        let saved = std::env::var("AGRARIAN_BIND_ADDR").ok();

        // SAFETY: Serialized by mutex; only test code touches this var.
        unsafe {
            match value {
                Some(v) => std::env::set_var("AGRARIAN_BIND_ADDR", v),
                None => std::env::remove_var("AGRARIAN_BIND_ADDR"),
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            match saved {
                Some(v) => std::env::set_var("AGRARIAN_BIND_ADDR", v),
                None => std::env::remove_var("AGRARIAN_BIND_ADDR"),
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_bind_addr(None, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:3000");
        });
    }

    #[test]
    fn config_custom_bind_addr() {
        with_bind_addr(Some("127.0.0.1:9090"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "127.0.0.1:9090");
        });
    }

    #[test]
    fn config_blank_bind_addr_falls_back() {
        with_bind_addr(Some("   "), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        });
    }
}
