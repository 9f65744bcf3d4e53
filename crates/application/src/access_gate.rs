use async_trait::async_trait;
use hrdesk_core::{AppResult, Role, Session, SessionUser};
use hrdesk_domain::RoleRequirement;

#[cfg(test)]
mod tests;

/// Port resolving the caller's session for one request.
///
/// Implementations fold their own failures into [`Session::failed`] so the
/// gate stays fail-closed.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolves the current request's session.
    async fn resolve_session(&self) -> Session;
}

/// Redirect targets used when the gate denies a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDestinations {
    login: String,
    forbidden: String,
}

impl GateDestinations {
    /// Creates destinations for unauthenticated and unauthorized callers.
    #[must_use]
    pub fn new(login: impl Into<String>, forbidden: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            forbidden: forbidden.into(),
        }
    }

    /// Returns the login destination.
    #[must_use]
    pub fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Returns the forbidden destination.
    #[must_use]
    pub fn forbidden(&self) -> &str {
        self.forbidden.as_str()
    }
}

/// Why the gate refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No usable session: missing user or a resolver error.
    AuthenticationAbsent,
    /// Valid session whose role is not listed.
    AuthorizationDenied,
}

impl DenialReason {
    /// Returns a stable label for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationAbsent => "authentication_absent",
            Self::AuthorizationDenied => "authorization_denied",
        }
    }
}

/// Denied outcome with the destination the caller must be sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDenial {
    /// Denial category.
    pub reason: DenialReason,
    /// Redirect target for the presentation layer.
    pub redirect_to: String,
}

/// Result of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The caller may proceed; carries the authorized user for downstream use.
    Allowed(SessionUser),
    /// The caller must be redirected.
    Denied(GateDenial),
}

impl GateDecision {
    /// Returns whether the decision lets the request through.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }
}

/// Role gate evaluated in front of every protected route.
///
/// Holds no per-request state and caches nothing: each call resolves the
/// session again.
#[derive(Debug, Clone)]
pub struct AccessGate {
    destinations: GateDestinations,
}

impl AccessGate {
    /// Creates a gate redirecting to the given destinations on denial.
    #[must_use]
    pub fn new(destinations: GateDestinations) -> Self {
        Self { destinations }
    }

    /// Returns the configured redirect destinations.
    #[must_use]
    pub fn destinations(&self) -> &GateDestinations {
        &self.destinations
    }

    /// Authorizes the current request against a list of permitted roles.
    ///
    /// An empty list fails with a configuration error before the session is
    /// resolved.
    pub async fn authorize<I>(
        &self,
        resolver: &dyn SessionResolver,
        required_roles: I,
    ) -> AppResult<GateDecision>
    where
        I: IntoIterator<Item = Role> + Send,
    {
        let requirement = RoleRequirement::new(required_roles)?;
        Ok(self.authorize_requirement(resolver, &requirement).await)
    }

    /// Authorizes the current request against a prebuilt requirement.
    pub async fn authorize_requirement(
        &self,
        resolver: &dyn SessionResolver,
        requirement: &RoleRequirement,
    ) -> GateDecision {
        let session = resolver.resolve_session().await;
        self.decide(&session, requirement)
    }

    /// Decides a resolved session against a requirement.
    #[must_use]
    pub fn decide(&self, session: &Session, requirement: &RoleRequirement) -> GateDecision {
        match resolve_access(session, requirement) {
            AccessResolution::Granted(user) => GateDecision::Allowed(user.clone()),
            AccessResolution::Unauthenticated => self.deny(DenialReason::AuthenticationAbsent),
            AccessResolution::RoleMissing => self.deny(DenialReason::AuthorizationDenied),
        }
    }

    fn deny(&self, reason: DenialReason) -> GateDecision {
        let redirect_to = match reason {
            DenialReason::AuthenticationAbsent => self.destinations.login(),
            DenialReason::AuthorizationDenied => self.destinations.forbidden(),
        };

        GateDecision::Denied(GateDenial {
            reason,
            redirect_to: redirect_to.to_owned(),
        })
    }
}

enum AccessResolution<'a> {
    Granted(&'a SessionUser),
    Unauthenticated,
    RoleMissing,
}

fn resolve_access<'a>(session: &'a Session, requirement: &RoleRequirement) -> AccessResolution<'a> {
    if session.error().is_some() {
        return AccessResolution::Unauthenticated;
    }

    let Some(user) = session.user() else {
        return AccessResolution::Unauthenticated;
    };

    if requirement.permits(user.role()) {
        AccessResolution::Granted(user)
    } else {
        AccessResolution::RoleMissing
    }
}
