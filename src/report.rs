//! Progress and final-report rendering. Advisory output, not a stable
//! machine-readable format.

use crate::stats::StatsSnapshot;
use crate::target::Target;

/// One progress line, emitted every 50th completed request.
#[must_use]
pub fn progress_line(snapshot: &StatsSnapshot) -> String {
    let blocked_x100 = snapshot.blocked_rate_x100();
    format!(
        "requests: {}, success: {}, blocked: {} ({}.{:02}%), errors: {}",
        snapshot.requests,
        snapshot.success,
        snapshot.blocked,
        blocked_x100 / 100,
        blocked_x100 % 100,
        snapshot.errors
    )
}

/// Final totals plus the fixed blocked-rate classification.
pub fn print_final_report(target: &Target, snapshot: &StatsSnapshot) {
    let success_x100 = snapshot.success_rate_x100();
    let blocked_x100 = snapshot.blocked_rate_x100();

    println!("{}", "=".repeat(60));
    println!("Target: {}", target.url());
    println!("Total Requests: {}", snapshot.requests);
    println!(
        "Successful (200): {} ({}.{:02}%)",
        snapshot.success,
        success_x100 / 100,
        success_x100 % 100
    );
    println!(
        "Blocked (403/429): {} ({}.{:02}%)",
        snapshot.blocked,
        blocked_x100 / 100,
        blocked_x100 % 100
    );
    println!("Errors: {}", snapshot.errors);
    println!("Assessment: {}", snapshot.assessment().as_str());
    println!("{}", "=".repeat(60));
}
