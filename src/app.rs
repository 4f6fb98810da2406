//! Entry-point invocation.
//!
//! [`AppRunner`] loads a configuration file and passes the result to an
//! entry function, once. It is the whole "framework" of this crate: load,
//! then call.
//!
//! # Example
//!
//! ```no_run
//! use hydra_app::app::AppRunner;
//! use hydra_app::config::Config;
//! use hydra_app::error::AppResult;
//!
//! fn main_task(cfg: Config) -> AppResult<()> {
//!     print!("{}", cfg.pretty()?);
//!     Ok(())
//! }
//!
//! AppRunner::new(env!("CARGO_MANIFEST_DIR"), "config.yaml")
//!     .run(main_task)
//!     .unwrap();
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, ConfigLoader};
use crate::error::AppResult;

/// Binds an entry function to the configuration file it receives.
#[derive(Debug, Clone)]
pub struct AppRunner {
    config_path: PathBuf,
}

impl AppRunner {
    /// Creates a runner for `config_path`, resolved against `base_dir`.
    pub fn new<B: AsRef<Path>, P: AsRef<Path>>(base_dir: B, config_path: P) -> Self {
        Self {
            config_path: ConfigLoader::resolve(base_dir, config_path),
        }
    }

    /// Returns the resolved configuration path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration and invokes `entry` with it.
    ///
    /// `entry` is not called when loading fails.
    pub fn run<F, R>(&self, entry: F) -> AppResult<R>
    where
        F: FnOnce(Config) -> AppResult<R>,
    {
        let config = ConfigLoader::load(&self.config_path)?.into_config();
        debug!(path = %self.config_path.display(), "Invoking entry function");
        entry(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_yaml::Value;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(name: &str, content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        dir
    }

    #[test]
    fn test_run_passes_loaded_config_to_entry() {
        let dir = dir_with("config.yaml", "db:\n  driver: mysql\n");
        let runner = AppRunner::new(dir.path(), "config.yaml");

        let driver = runner
            .run(|cfg| {
                Ok(cfg
                    .select("db.driver")
                    .and_then(Value::as_str)
                    .map(str::to_string))
            })
            .unwrap();

        assert_eq!(driver.as_deref(), Some("mysql"));
    }

    #[test]
    fn test_run_invokes_entry_exactly_once() {
        let dir = dir_with("config.yaml", "foo: 1\n");
        let calls = Cell::new(0);

        AppRunner::new(dir.path(), "config.yaml")
            .run(|_| {
                calls.set(calls.get() + 1);
                Ok(())
            })
            .unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_run_skips_entry_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let called = Cell::new(false);

        let result = AppRunner::new(dir.path(), "absent.yaml").run(|_| {
            called.set(true);
            Ok(())
        });

        assert!(matches!(result, Err(AppError::ConfigNotFound { .. })));
        assert!(!called.get());
    }

    #[test]
    fn test_run_skips_entry_when_file_invalid() {
        let dir = dir_with("config.yaml", "foo: [1, 2\n");
        let called = Cell::new(false);

        let result = AppRunner::new(dir.path(), "config.yaml").run(|_| {
            called.set(true);
            Ok(())
        });

        assert!(matches!(result, Err(AppError::ConfigParseError { .. })));
        assert!(!called.get());
    }

    #[test]
    fn test_run_propagates_entry_error() {
        let dir = dir_with("config.yaml", "foo: 1\n");

        let result: AppResult<()> = AppRunner::new(dir.path(), "config.yaml").run(|_| {
            Err(AppError::RenderError {
                message: "entry failed".to_string(),
            })
        });

        assert!(matches!(result, Err(AppError::RenderError { .. })));
    }

    #[test]
    fn test_config_path_is_resolved_against_base_dir() {
        let runner = AppRunner::new("/opt/app", "conf/config.yaml");
        assert_eq!(runner.config_path(), Path::new("/opt/app/conf/config.yaml"));
    }
}
