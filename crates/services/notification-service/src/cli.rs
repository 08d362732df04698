//! Command-line adapter for the seeder.
//!
//! Maps the optional user id argument and the seeding outcome to an exit
//! code. The completion line goes to `stdout`; errors and usage go to
//! `stderr`.

use std::io::Write;

use common::AppError;

use crate::seeder::{seed_notifications, StoreConnector};

/// Usage line printed when the user id is missing
pub const USAGE: &str = "Usage: seed-notifications <userId>";

/// Process exit code on success
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code on any failure
pub const EXIT_FAILURE: u8 = 1;

/// Run one seeding invocation and return the process exit code.
///
/// A missing or blank user id is reported before any connection is attempted.
pub async fn run_seed_command<C>(
    user_id: Option<&str>,
    connector: &C,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> u8
where
    C: StoreConnector + ?Sized,
{
    let Some(user_id) = user_id else {
        let _ = writeln!(stderr, "{}", USAGE);
        return EXIT_FAILURE;
    };

    match seed_notifications(connector, user_id).await {
        Ok(count) => {
            tracing::debug!(count, "Seed command finished");
            let _ = writeln!(stdout, "Seeded {} notifications for user {}", count, user_id);
            EXIT_SUCCESS
        }
        Err(AppError::InvalidArgument(msg)) => {
            let _ = writeln!(stderr, "{}\n{}", msg, USAGE);
            EXIT_FAILURE
        }
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            let _ = writeln!(stderr, "{}", e);
            EXIT_FAILURE
        }
    }
}
