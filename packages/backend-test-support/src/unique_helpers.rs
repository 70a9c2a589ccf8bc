//! Unique test data built from ULIDs so tests sharing a store never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use carmaster_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("booking");
/// let b = unique_str("booking");
/// assert_ne!(a, b);
/// assert!(a.starts_with("booking-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique email address in the format `{prefix}-{ulid}@example.test`.
///
/// ```
/// use carmaster_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("owner");
/// assert!(email.starts_with("owner-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}
