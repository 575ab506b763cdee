use crate::claims::{ClaimsAccess, RawClaims};
use crate::error::Error;

/// View over the nested `address` claim mapping.
///
/// Borrows the sub-mapping from its parent claim set; same accessor
/// semantics, including the missing-vs-wrong-type split, and custom nested
/// names stay reachable through [`ClaimsAccess::all_claims`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddressClaims<'a> {
    claims: &'a RawClaims,
}

impl<'a> AddressClaims<'a> {
    pub(crate) fn new(claims: &'a RawClaims) -> Self {
        Self { claims }
    }

    pub fn formatted(&self) -> Result<Option<&str>, Error> {
        self.get_string("formatted")
    }

    pub fn street_address(&self) -> Result<Option<&str>, Error> {
        self.get_string("street_address")
    }

    pub fn locality(&self) -> Result<Option<&str>, Error> {
        self.get_string("locality")
    }

    pub fn region(&self) -> Result<Option<&str>, Error> {
        self.get_string("region")
    }

    pub fn postal_code(&self) -> Result<Option<&str>, Error> {
        self.get_string("postal_code")
    }

    pub fn country(&self) -> Result<Option<&str>, Error> {
        self.get_string("country")
    }
}

impl ClaimsAccess for AddressClaims<'_> {
    fn all_claims(&self) -> &RawClaims {
        self.claims
    }
}
