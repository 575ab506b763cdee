use std::fmt;

/// Claim access failure.
///
/// The authorization decision itself never produces one of these: a request
/// with unusable authorizer data simply stays unauthenticated. Errors only
/// surface later, when a typed accessor is invoked against a claim that is
/// absent (required accessors) or carries an incompatible raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A claim the token issuer's spec declares mandatory is absent.
    MissingClaim(String),
    /// A claim is present but its raw value is not assignable to the
    /// requested type. Never downgraded to `None`: a wrong-typed claim is
    /// malformed upstream data and must be loud.
    TypeMismatch {
        claim: String,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingClaim(claim) => write!(f, "missing required claim '{claim}'"),
            Error::TypeMismatch { claim, expected } => {
                write!(f, "claim '{claim}' is not a {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_claim_display() {
        let error = Error::MissingClaim("iss".to_string());
        assert_eq!(error.to_string(), "missing required claim 'iss'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = Error::TypeMismatch {
            claim: "exp".to_string(),
            expected: "number",
        };
        assert_eq!(error.to_string(), "claim 'exp' is not a number");
    }
}
