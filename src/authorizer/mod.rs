
use tracing::debug;

use crate::claims::{ClaimValue, OidcClaims, RawClaims};
use crate::security::{Principal, SecurityContext};

/// Authorization decision point for Cognito user-pool authorizer requests.
///
/// Note: token signature verification happens upstream, in the gateway's
/// authorizer, before the claims ever reach this process. This type only
/// decides whether the forwarded claims carry a usable identity, based on a
/// single field: the `sub` claim. Every other claim is deferred to
/// [`OidcClaims`] for on-demand inspection, so a request authenticates even
/// when unrelated claims are malformed.
pub struct UserPoolAuthorizer;

impl UserPoolAuthorizer {
    pub fn new() -> Self {
        Self
    }

    /// Decide the authentication outcome for one request.
    ///
    /// `authorizer` is the per-request authorizer data forwarded by the
    /// gateway, which may be absent entirely. Returns `None` when no usable
    /// identity is present; unusable input degrades gracefully and never
    /// raises an error.
    pub fn authorize(&self, authorizer: Option<RawClaims>) -> Option<SecurityContext> {
        let mut authorizer = match authorizer {
            Some(authorizer) => authorizer,
            None => {
                debug!("no authorizer data, request stays unauthenticated");
                return None;
            }
        };

        let Some(ClaimValue::Map(claims)) = authorizer.remove("claims") else {
            debug!("authorizer data carries no claims mapping, request stays unauthenticated");
            return None;
        };

        let subject = match claims.get("sub") {
            Some(ClaimValue::String(sub)) if !is_blank(sub) => sub.clone(),
            _ => {
                debug!("no usable sub claim, request stays unauthenticated");
                return None;
            }
        };

        debug!("authenticated principal '{subject}'");
        let principal = Principal::new(subject, OidcClaims::new(claims));
        Some(SecurityContext::new(principal))
    }
}

impl Default for UserPoolAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
