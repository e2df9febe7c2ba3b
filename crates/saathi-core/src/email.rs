//! Email validation and normalization.
//!
//! The check is deliberately permissive: one `@`, no whitespace, and a `.`
//! in the domain with text on both sides. Anything stricter belongs to the
//! mail provider that eventually sends the launch announcement.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::WaitlistError;

// The pattern is a literal; it cannot fail to compile.
#[allow(clippy::unwrap_used)]
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Return whether `raw` has the shape `local@domain.tld`.
///
/// The raw input is checked as given; surrounding whitespace makes it
/// invalid.
///
/// # Examples
///
/// ```
/// # use saathi_core::email::is_valid_email;
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw)
}

/// Trim surrounding whitespace and lowercase.
///
/// Idempotent: normalizing an already normalized address returns it
/// unchanged.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A validated, normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate `raw` and return its normalized form.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::InvalidEmail`] if `raw` fails
    /// [`is_valid_email`].
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        if !is_valid_email(raw) {
            return Err(WaitlistError::InvalidEmail);
        }
        Ok(Self(normalize_email(raw)))
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    /// Borrow the address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── is_valid_email ───────────────────────────────────────────────

    #[test]
    fn accepts_plain_addresses() {
        for ok in [
            "user@example.com",
            "User@Example.com",
            "a@b.c",
            "first.last+tag@sub.domain.co.in",
            "x@localhost.localdomain",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_missing_at() {
        for bad in ["not-an-email", "example.com", "", "user.example.com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_empty_local_or_domain() {
        for bad in ["@example.com", "user@", "@", "user@.", "user@example.", "user@.com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_more_than_one_at() {
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("user@example.com@"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        for bad in [
            "user name@example.com",
            "user@exa mple.com",
            " user@example.com",
            "user@example.com ",
            "user@example.com\n",
            "user\t@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn accepts_generated_local_domain_tld_shapes() {
        let locals = ["a", "john.doe", "x_y-z", "9"];
        let domains = ["b", "example", "mail-server", "sub.example"];
        let tlds = ["c", "com", "co.in", "museum"];
        for l in locals {
            for d in domains {
                for t in tlds {
                    let addr = format!("{l}@{d}.{t}");
                    assert!(is_valid_email(&addr), "{addr} should be accepted");
                }
            }
        }
    }

    // ── normalize_email ──────────────────────────────────────────────

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  User@Example.COM \n"), "user@example.com");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["User@Example.com", " MiXeD@CaSe.Org ", "already@normal.in", "ÄBC@Müller.DE"] {
            let once = normalize_email(raw);
            assert_eq!(normalize_email(&once), once);
        }
    }

    // ── Email ────────────────────────────────────────────────────────

    #[test]
    fn parse_normalizes() {
        let email = Email::parse("User@Example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn parse_rejects_invalid() {
        let err = Email::parse("not-an-email").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn parsed_email_is_still_valid() {
        let email = Email::parse("Someone@Sub.Example.ORG").unwrap();
        assert!(is_valid_email(email.as_str()));
    }
}
