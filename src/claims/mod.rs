mod address;

use std::collections::{BTreeSet, HashMap};

pub use address::AddressClaims;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The untyped claim mapping forwarded by the gateway authorizer.
///
/// Supplied externally, never mutated here. May be missing claims entirely,
/// or carry values of unexpected shapes; nothing is validated up front.
pub type RawClaims = HashMap<String, ClaimValue>;

/// A single dynamically-typed claim value.
///
/// Deserializes untagged, so a gateway event's JSON claims document maps
/// straight into [`RawClaims`]. JSON arrays become [`Sequence`]; [`Set`]
/// values have no JSON shape and are only built programmatically.
///
/// [`Sequence`]: ClaimValue::Sequence
/// [`Set`]: ClaimValue::Set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Bool(bool),
    Number(i64),
    String(String),
    /// Order-preserving multi-value claim.
    Sequence(Vec<String>),
    /// Unordered, deduplicated multi-value claim.
    Set(BTreeSet<String>),
    /// Nested claim mapping, one level deep ("address").
    Map(RawClaims),
}

/// Normalized view over a multi-value claim.
///
/// Two result kinds, matching the two observable raw shapes: sequences keep
/// element order, sets compare unordered. Borrows from the backing mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StringCollection<'a> {
    Sequence(&'a [String]),
    Set(&'a BTreeSet<String>),
}

impl<'a> StringCollection<'a> {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            StringCollection::Sequence(values) => values.iter().any(|v| v == value),
            StringCollection::Set(values) => values.contains(value),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StringCollection::Sequence(values) => values.len(),
            StringCollection::Set(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(self) -> Option<&'a str> {
        match self {
            StringCollection::Sequence(values) => values.first().map(String::as_str),
            StringCollection::Set(values) => values.iter().next().map(String::as_str),
        }
    }
}

/// Lazily-typed accessors over a raw claim mapping.
///
/// Every accessor inspects the mapping on demand, with no memoization, so a
/// malformed value re-fails identically on every call. The outcome split is
/// deliberate and asymmetric: a missing key is `Ok(None)` (or `MissingClaim`
/// for the required variants), while a present key of the wrong shape is
/// always a `TypeMismatch` error, never a silent coercion and never `None`.
pub trait ClaimsAccess {
    /// The complete raw mapping, unmodified. Vendor and `custom:*` claim
    /// names not covered by any typed accessor stay reachable through this.
    fn all_claims(&self) -> &RawClaims;

    fn get_string(&self, name: &str) -> Result<Option<&str>, Error> {
        match self.all_claims().get(name) {
            None => Ok(None),
            Some(ClaimValue::String(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(type_mismatch(name, "string")),
        }
    }

    fn get_i64(&self, name: &str) -> Result<Option<i64>, Error> {
        match self.all_claims().get(name) {
            None => Ok(None),
            Some(ClaimValue::Number(value)) => Ok(Some(*value)),
            Some(_) => Err(type_mismatch(name, "number")),
        }
    }

    fn get_bool(&self, name: &str) -> Result<Option<bool>, Error> {
        match self.all_claims().get(name) {
            None => Ok(None),
            Some(ClaimValue::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(type_mismatch(name, "boolean")),
        }
    }

    fn get_collection(&self, name: &str) -> Result<Option<StringCollection<'_>>, Error> {
        match self.all_claims().get(name) {
            None => Ok(None),
            Some(ClaimValue::Sequence(values)) => {
                Ok(Some(StringCollection::Sequence(values.as_slice())))
            }
            Some(ClaimValue::Set(values)) => Ok(Some(StringCollection::Set(values))),
            Some(_) => Err(type_mismatch(name, "string collection")),
        }
    }

    fn get_required_string(&self, name: &str) -> Result<&str, Error> {
        self.get_string(name)?
            .ok_or_else(|| Error::MissingClaim(name.to_string()))
    }

    fn get_required_i64(&self, name: &str) -> Result<i64, Error> {
        self.get_i64(name)?
            .ok_or_else(|| Error::MissingClaim(name.to_string()))
    }

    fn get_required_collection(&self, name: &str) -> Result<StringCollection<'_>, Error> {
        self.get_collection(name)?
            .ok_or_else(|| Error::MissingClaim(name.to_string()))
    }
}

fn type_mismatch(name: &str, expected: &'static str) -> Error {
    Error::TypeMismatch {
        claim: name.to_string(),
        expected,
    }
}

/// Typed, read-only view over the claim set of a verified Cognito user-pool
/// token.
///
/// Owns the raw mapping handed over by the authorizer, one instance per
/// request. Standard OpenID Connect claims get named getters; everything
/// else is reachable through [`ClaimsAccess::all_claims`].
#[derive(Clone, Debug, PartialEq)]
pub struct OidcClaims {
    claims: RawClaims,
}

impl OidcClaims {
    pub fn new(claims: RawClaims) -> Self {
        Self { claims }
    }

    // Claims the OpenID Connect spec requires in every ID token. Missing is
    // caller misuse, not normal absence, hence the required accessors.

    pub fn sub(&self) -> Result<&str, Error> {
        self.get_required_string("sub")
    }

    pub fn iss(&self) -> Result<&str, Error> {
        self.get_required_string("iss")
    }

    pub fn aud(&self) -> Result<StringCollection<'_>, Error> {
        self.get_required_collection("aud")
    }

    /// The audience as a single string value.
    ///
    /// A multi-value audience yields its first entry without collapsing;
    /// an empty collection counts as missing.
    pub fn single_aud(&self) -> Result<&str, Error> {
        match self.all_claims().get("aud") {
            None => Err(Error::MissingClaim("aud".to_string())),
            Some(ClaimValue::String(value)) => Ok(value.as_str()),
            Some(ClaimValue::Sequence(values)) => StringCollection::Sequence(values.as_slice())
                .first()
                .ok_or_else(|| Error::MissingClaim("aud".to_string())),
            Some(ClaimValue::Set(values)) => StringCollection::Set(values)
                .first()
                .ok_or_else(|| Error::MissingClaim("aud".to_string())),
            Some(_) => Err(type_mismatch("aud", "string")),
        }
    }

    pub fn exp(&self) -> Result<i64, Error> {
        self.get_required_i64("exp")
    }

    pub fn iat(&self) -> Result<i64, Error> {
        self.get_required_i64("iat")
    }

    // Optional standard claims.

    pub fn auth_time(&self) -> Result<Option<i64>, Error> {
        self.get_i64("auth_time")
    }

    pub fn nonce(&self) -> Result<Option<&str>, Error> {
        self.get_string("nonce")
    }

    pub fn acr(&self) -> Result<Option<&str>, Error> {
        self.get_string("acr")
    }

    pub fn amr(&self) -> Result<Option<StringCollection<'_>>, Error> {
        self.get_collection("amr")
    }

    pub fn azp(&self) -> Result<Option<&str>, Error> {
        self.get_string("azp")
    }

    pub fn name(&self) -> Result<Option<&str>, Error> {
        self.get_string("name")
    }

    pub fn given_name(&self) -> Result<Option<&str>, Error> {
        self.get_string("given_name")
    }

    pub fn family_name(&self) -> Result<Option<&str>, Error> {
        self.get_string("family_name")
    }

    pub fn middle_name(&self) -> Result<Option<&str>, Error> {
        self.get_string("middle_name")
    }

    pub fn nickname(&self) -> Result<Option<&str>, Error> {
        self.get_string("nickname")
    }

    pub fn preferred_username(&self) -> Result<Option<&str>, Error> {
        self.get_string("preferred_username")
    }

    pub fn profile(&self) -> Result<Option<&str>, Error> {
        self.get_string("profile")
    }

    pub fn picture(&self) -> Result<Option<&str>, Error> {
        self.get_string("picture")
    }

    pub fn website(&self) -> Result<Option<&str>, Error> {
        self.get_string("website")
    }

    pub fn email(&self) -> Result<Option<&str>, Error> {
        self.get_string("email")
    }

    pub fn email_verified(&self) -> Result<Option<bool>, Error> {
        self.get_bool("email_verified")
    }

    pub fn gender(&self) -> Result<Option<&str>, Error> {
        self.get_string("gender")
    }

    pub fn birthdate(&self) -> Result<Option<&str>, Error> {
        self.get_string("birthdate")
    }

    pub fn zoneinfo(&self) -> Result<Option<&str>, Error> {
        self.get_string("zoneinfo")
    }

    pub fn locale(&self) -> Result<Option<&str>, Error> {
        self.get_string("locale")
    }

    pub fn phone_number(&self) -> Result<Option<&str>, Error> {
        self.get_string("phone_number")
    }

    pub fn phone_number_verified(&self) -> Result<Option<bool>, Error> {
        self.get_bool("phone_number_verified")
    }

    pub fn updated_at(&self) -> Result<Option<i64>, Error> {
        self.get_i64("updated_at")
    }

    /// The user-pool username, a Cognito vendor claim.
    pub fn cognito_username(&self) -> Result<Option<&str>, Error> {
        self.get_string("cognito:username")
    }

    /// The nested postal address claim set, if any.
    pub fn address(&self) -> Result<Option<AddressClaims<'_>>, Error> {
        match self.claims.get("address") {
            None => Ok(None),
            Some(ClaimValue::Map(claims)) => Ok(Some(AddressClaims::new(claims))),
            Some(_) => Err(type_mismatch("address", "claim mapping")),
        }
    }
}

impl ClaimsAccess for OidcClaims {
    fn all_claims(&self) -> &RawClaims {
        &self.claims
    }
}
