#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

//! Typed identity views over API gateway authorizer claims.
//!
//! A Cognito user-pool authorizer verifies the caller's token before the
//! request reaches the service, then forwards the token's claims as an
//! untyped mapping. This crate turns that mapping into a typed, lazily
//! evaluated claim view and decides, per request, whether it carries an
//! authenticated identity: [`UserPoolAuthorizer::authorize`] checks the
//! `sub` claim and, when it is a non-blank string, installs a
//! [`SecurityContext`] whose [`Principal`] exposes the full claim set
//! through [`OidcClaims`]. Everything else stays unvalidated until a typed
//! accessor asks for it.

pub mod authorizer;
pub mod claims;
pub mod error;
pub mod security;

pub use authorizer::UserPoolAuthorizer;
pub use claims::{AddressClaims, ClaimValue, ClaimsAccess, OidcClaims, RawClaims, StringCollection};
pub use error::Error;
pub use security::{Principal, SecurityContext, AUTHENTICATION_SCHEME};
