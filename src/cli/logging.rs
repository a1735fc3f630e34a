use anyhow::{anyhow, Result};
use log::{info, LevelFilter};
use std::fs::{self, File};
use std::path::PathBuf;

/// Name of the log directory and file.
pub const LOG_NAME: &str = "pasi";

/// Path of the log file called `filename`, inside the temp directory.
pub fn log_path(filename: &str) -> PathBuf {
    std::env::temp_dir()
        .join(LOG_NAME)
        .join(format!("{filename}.log"))
}

/// Maps a `-v` count to a [`LevelFilter`]; 0 is `Off`, 5 is `Trace`.
fn level_filter(verbosity: usize) -> Result<LevelFilter> {
    LevelFilter::iter().nth(verbosity).ok_or_else(|| {
        anyhow!(
            "Verbosity must be between 0 and {}, not {}!",
            LevelFilter::max() as usize,
            verbosity
        )
    })
}

fn create_log_file(filename: &str) -> Result<File> {
    let path = log_path(filename);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    Ok(File::create(path)?)
}

/// Setup logger. Logs nothing and creates no file when `verbosity` is 0.
pub fn setup_logger(verbosity: usize, filename: &str) -> Result<()> {
    let level = level_filter(verbosity)?;

    if level == LevelFilter::Off {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            let target = record.target();

            out.finish(format_args!(
                "{} {:<5} {}:{} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.level(),
                target.rsplit("::").next().unwrap_or(target),
                record.line().unwrap_or(0),
                message
            ));
        })
        .level(level)
        .chain(create_log_file(filename)?)
        .apply()?;

    info!("Logging at {} to {}", level, log_path(filename).display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() -> Result<()> {
        assert_eq!(level_filter(0)?, LevelFilter::Off);
        assert_eq!(level_filter(1)?, LevelFilter::Error);
        assert_eq!(level_filter(5)?, LevelFilter::Trace);

        assert_eq!(
            level_filter(6).unwrap_err().to_string(),
            "Verbosity must be between 0 and 5, not 6!"
        );

        Ok(())
    }

    #[test]
    fn test_verbosity_zero_is_silent() {
        assert!(setup_logger(0, LOG_NAME).is_ok());
    }

    #[test]
    fn test_log_path() {
        let path = log_path("run");

        assert!(path.ends_with("pasi/run.log"));
    }
}
