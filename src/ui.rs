//! Console output formatting.
//!
//! Pure formatting functions; no prompts, since the tool runs unattended
//! inside CI.

use crate::domain::VersionPlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the resolved publish plan.
///
/// # Arguments
/// * `plan` - The plan about to be (or that was) published
pub fn display_plan(plan: &VersionPlan) {
    println!("\n\x1b[1mResolved release plan:\x1b[0m");
    println!("  Version: \x1b[32m{}\x1b[0m", plan.next_version);
    println!("  Tag:     \x1b[32m{}\x1b[0m", plan.next_tag);
    println!("  Channel: \x1b[36m{}\x1b[0m", plan.dist_channel);
    println!("  Message: {}", plan.publish_message);
}

/// Display the no-op outcome when no release scenario applies.
pub fn display_no_scenario(branch: &str, environment: &str) {
    display_status(&format!(
        "No release scenario matches branch '{}' in environment '{}' - nothing to publish",
        branch, environment
    ));
}
