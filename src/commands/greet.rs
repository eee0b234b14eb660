pub const GREETING: &str = "Hello from the Cobra CLI!";

/// Returns the greeting printed by the root command.
pub fn message() -> &'static str {
    GREETING
}
