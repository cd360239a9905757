use std::fmt;

use lettre::Address;

use super::MailError;

/// A syntactically valid email address.
///
/// Construction goes through [`EmailAddress::parse`], so every value of this
/// type has already passed the address grammar check. Form handlers surface
/// the parse failure as an inline validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(Address);

impl EmailAddress {
    /// Parse and validate an address from user input.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not a well-formed email address.
    pub fn parse(input: &str) -> Result<Self, MailError> {
        let address = input.trim().parse::<Address>()?;
        Ok(Self(address))
    }

    /// Unwrap into the underlying transport address.
    #[must_use]
    pub fn into_inner(self) -> Address {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
