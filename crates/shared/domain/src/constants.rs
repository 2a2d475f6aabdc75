//! Domain-level constants.
//!
//! These constants define the signup form rules and the fixed user-facing
//! messages (single locale).

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length, in user-perceived characters
pub const MIN_USERNAME_LENGTH: usize = 3;

// =============================================================================
// Debounce intervals
// =============================================================================

/// Quiet interval before a typed username is considered settled
pub const USERNAME_DEBOUNCE_MS: u64 = 800;

/// Quiet interval before a typed password is considered settled
pub const PASSWORD_DEBOUNCE_MS: u64 = 800;

/// Quiet interval for the password/confirmation comparison
pub const COMPARISON_DEBOUNCE_MS: u64 = 200;

/// Quiet interval for the password strength comparison
pub const STRENGTH_DEBOUNCE_MS: u64 = 200;

// =============================================================================
// Messages
// =============================================================================

/// Shown while the settled username is too short
pub const USERNAME_TOO_SHORT_MESSAGE: &str = "User name must at least have 3 characters";

/// Shown while the settled password is empty
pub const PASSWORD_EMPTY_MESSAGE: &str = "Password must not be empty";

/// Shown while password and confirmation differ
pub const PASSWORDS_DONT_MATCH_MESSAGE: &str = "Passwords don't match";

/// Shown while the password grades below the threshold
pub const PASSWORD_NOT_STRONG_ENOUGH_MESSAGE: &str = "Password not strong enough";

/// Confirmation presented after a successful signup
pub const WELCOME_MESSAGE: &str = "Welcome! Great to have you on board!";
