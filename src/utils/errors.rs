//! Enhanced error types with actionable suggestions

use colored::Colorize;
use thiserror::Error;

/// Enhanced error with suggestions for the user
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ReleaseDevError {
    pub message: String,
    pub suggestions: Vec<String>,
}

impl ReleaseDevError {
    /// Create a new error with suggestions
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Add a suggestion to the error
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Display the error with suggestions
    pub fn display(&self) {
        crate::log_error!("{}", self.message);

        if !self.suggestions.is_empty() {
            println!();
            println!("{}", "Suggestions:".yellow().bold());
            for suggestion in &self.suggestions {
                println!("  {} {}", "→".blue(), suggestion);
            }
        }
    }

    // Common error patterns

    /// Unknown release channel error
    pub fn unknown_channel(name: &str) -> Self {
        Self::new(format!("Release channel '{}' unknown", name)).suggest(format!(
            "Valid channels: {}",
            crate::release::ReleaseChannel::ALL_NAMES.join(", ")
        ))
    }

    /// Publish script not found error
    pub fn script_not_found(script: &str) -> Self {
        Self::new(format!("Publish script not found: {}", script))
            .suggest("Verify the script path is correct")
            .suggest("Use --script to point at a different publish script")
    }

    /// Empty release response error
    pub fn empty_release(channel: &str) -> Self {
        Self::new(format!("Failed to download release for {}", channel))
            .suggest("Check network connectivity to the release bucket")
            .suggest("Retry in a few minutes; the upstream channel file may be rotating")
    }
}

/// Helper to display error and exit
pub fn display_error_and_exit(error: ReleaseDevError) -> ! {
    error.display();
    std::process::exit(1);
}
