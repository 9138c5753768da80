use thiserror::Error;

/// Errors raised while interpreting a menu selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Input was not a number, or was outside the menu range
    #[error("Error: Invalid selection '{input}'. Please enter a number between 1 and {max}.")]
    InvalidSelection { input: String, max: usize },
}
