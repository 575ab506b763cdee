use crate::claims::OidcClaims;

/// Authentication scheme label attached to every security context produced
/// by this crate.
pub const AUTHENTICATION_SCHEME: &str = "cognito_user_pool_authorizer";

/// An authenticated identity: the token's subject bound to its claim set.
///
/// Only [`UserPoolAuthorizer`] constructs principals, after it has verified
/// the subject is a non-blank string; the invariant is enforced there, not
/// here.
///
/// [`UserPoolAuthorizer`]: crate::authorizer::UserPoolAuthorizer
#[derive(Clone, Debug, PartialEq)]
pub struct Principal {
    name: String,
    claims: OidcClaims,
}

impl Principal {
    pub(crate) fn new(name: String, claims: OidcClaims) -> Self {
        Self { name, claims }
    }

    /// The subject ("sub") claim value.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn claims(&self) -> &OidcClaims {
        &self.claims
    }
}

/// Per-request record of a successful authentication.
///
/// The authorizer only ever produces authenticated, secure contexts; an
/// unauthenticated request gets no context at all. No role model is derived
/// from user-pool claims, so role membership is uniformly false.
#[derive(Clone, Debug, PartialEq)]
pub struct SecurityContext {
    principal: Principal,
}

impl SecurityContext {
    pub(crate) fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn is_secure(&self) -> bool {
        true
    }

    pub fn authentication_scheme(&self) -> &'static str {
        AUTHENTICATION_SCHEME
    }

    pub fn user_principal(&self) -> &Principal {
        &self.principal
    }

    pub fn is_user_in_role(&self, _role: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::claims::{ClaimValue, OidcClaims};

    fn context_for(sub: &str) -> SecurityContext {
        let mut claims = HashMap::new();
        claims.insert("sub".to_string(), ClaimValue::String(sub.to_string()));
        SecurityContext::new(Principal::new(sub.to_string(), OidcClaims::new(claims)))
    }

    #[test]
    fn test_context_is_always_secure() {
        assert!(context_for("123").is_secure());
    }

    #[test]
    fn test_context_reports_fixed_scheme() {
        assert_eq!(
            context_for("123").authentication_scheme(),
            "cognito_user_pool_authorizer"
        );
    }

    #[test]
    fn test_user_is_never_in_any_role() {
        let context = context_for("123");
        assert!(!context.is_user_in_role(""));
        assert!(!context.is_user_in_role("user"));
        assert!(!context.is_user_in_role("USER"));
        assert!(!context.is_user_in_role("admin"));
    }

    #[test]
    fn test_principal_exposes_name_and_claims() {
        let context = context_for("someSub");
        assert_eq!(context.user_principal().name(), "someSub");
        assert_eq!(context.user_principal().claims().sub(), Ok("someSub"));
    }
}
