//! Authorization gate: wafprobe only runs against targets the operator owns
//! or has written permission to test.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{AppError, AppResult, ValidationError};

const CONFIRMATION_PHRASE: &str = "I AGREE";

const DISCLAIMER: &str = "\
WARNING: AUTHORIZED TESTING ONLY. Unauthorized load testing is illegal.
By continuing you confirm that you own the target or hold written
authorization, and that you accept full responsibility for this run.";

/// Confirms authorization, interactively unless `--authorized` (or the
/// config equivalent) was given, then appends a timestamped line to the
/// usage log.
///
/// # Errors
///
/// Returns `AuthorizationDeclined` when the operator does not type the
/// confirmation phrase, or an I/O error when the prompt cannot be read.
pub fn confirm_authorization(pre_authorized: bool, usage_log: &Path) -> AppResult<()> {
    if !pre_authorized {
        println!("{DISCLAIMER}");
        print!("Type '{CONFIRMATION_PHRASE}' to continue: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        if line.trim() != CONFIRMATION_PHRASE {
            return Err(AppError::validation(ValidationError::AuthorizationDeclined));
        }
    }

    record_confirmation(usage_log);
    Ok(())
}

/// Best effort, matching the original behavior: a usage log that cannot be
/// written must not stop an authorized run.
fn record_confirmation(usage_log: &Path) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("{timestamp} - authorization confirmed - wafprobe run\n");
    let result = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(usage_log)
        .and_then(|mut file| file.write_all(line.as_bytes()));
    if let Err(err) = result {
        warn!(path = %usage_log.display(), error = %err, "failed to append usage log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_authorized_skips_prompt_and_logs() -> AppResult<()> {
        let dir = tempfile::tempdir()?;
        let log_path = dir.path().join("usage_log.txt");

        confirm_authorization(true, &log_path)?;
        confirm_authorization(true, &log_path)?;

        let content = std::fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|line| line.contains("authorization confirmed")));
        Ok(())
    }

    #[test]
    fn unwritable_usage_log_is_not_fatal() -> AppResult<()> {
        let dir = tempfile::tempdir()?;
        // A directory path cannot be opened for append.
        confirm_authorization(true, dir.path())?;
        Ok(())
    }
}
