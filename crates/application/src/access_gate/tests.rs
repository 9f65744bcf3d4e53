use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hrdesk_core::{AppError, Role, Session, SessionError, SessionUser};
use hrdesk_domain::RoleRequirement;

use super::{AccessGate, DenialReason, GateDecision, GateDestinations, SessionResolver};

struct FakeSessionResolver {
    session: Session,
    calls: AtomicUsize,
}

impl FakeSessionResolver {
    fn new(session: Session) -> Self {
        Self {
            session,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionResolver for FakeSessionResolver {
    async fn resolve_session(&self) -> Session {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.session.clone()
    }
}

fn gate() -> AccessGate {
    AccessGate::new(GateDestinations::new("/login", "/unauthorized"))
}

fn user(role: Role) -> SessionUser {
    SessionUser::new("u1", role, None)
}

fn denial_reason(decision: &GateDecision) -> Option<DenialReason> {
    match decision {
        GateDecision::Allowed(_) => None,
        GateDecision::Denied(denial) => Some(denial.reason),
    }
}

#[tokio::test]
async fn listed_role_is_allowed() {
    let resolver = FakeSessionResolver::new(Session::authenticated(user(Role::Hr)));

    let decision = gate().authorize(&resolver, [Role::Hr, Role::Admin]).await;

    assert!(matches!(
        decision,
        Ok(GateDecision::Allowed(ref allowed)) if allowed.id() == "u1" && allowed.role() == Role::Hr
    ));
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn unlisted_role_is_redirected_to_forbidden() {
    let resolver = FakeSessionResolver::new(Session::authenticated(user(Role::Manager)));

    let decision = gate().authorize(&resolver, [Role::Hr, Role::Admin]).await;

    match decision {
        Ok(GateDecision::Denied(denial)) => {
            assert_eq!(denial.reason, DenialReason::AuthorizationDenied);
            assert_eq!(denial.redirect_to, "/unauthorized");
        }
        other => panic!("expected denial, got {other:?}"),
    }
}

#[tokio::test]
async fn anonymous_session_is_redirected_to_login() {
    let resolver = FakeSessionResolver::new(Session::anonymous());

    let decision = gate().authorize(&resolver, [Role::Admin]).await;

    match decision {
        Ok(GateDecision::Denied(denial)) => {
            assert_eq!(denial.reason, DenialReason::AuthenticationAbsent);
            assert_eq!(denial.redirect_to, "/login");
        }
        other => panic!("expected denial, got {other:?}"),
    }
}

#[tokio::test]
async fn session_error_denies_even_with_matching_role() {
    let resolver = FakeSessionResolver::new(Session::new(
        Some(user(Role::Admin)),
        Some(SessionError::new("session store unavailable")),
    ));

    let decision = gate().authorize(&resolver, [Role::Admin]).await;

    assert_eq!(
        decision.as_ref().ok().and_then(denial_reason),
        Some(DenialReason::AuthenticationAbsent)
    );
}

#[tokio::test]
async fn failed_resolution_without_user_is_denied() {
    let resolver = FakeSessionResolver::new(Session::failed(SessionError::new("decode error")));

    let decision = gate().authorize(&resolver, Role::all().to_vec()).await;

    assert_eq!(
        decision.as_ref().ok().and_then(denial_reason),
        Some(DenialReason::AuthenticationAbsent)
    );
}

#[tokio::test]
async fn empty_requirement_fails_before_resolving_session() {
    let resolver = FakeSessionResolver::new(Session::authenticated(user(Role::Admin)));

    let decision = gate().authorize(&resolver, Vec::<Role>::new()).await;

    assert!(matches!(decision, Err(AppError::Configuration(_))));
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn repeated_authorization_yields_same_decision() {
    let resolver = FakeSessionResolver::new(Session::authenticated(user(Role::Finance)));
    let gate = gate();

    let first = gate.authorize(&resolver, [Role::Hr]).await;
    let second = gate.authorize(&resolver, [Role::Hr]).await;

    assert_eq!(first.ok(), second.ok());
    assert_eq!(resolver.calls(), 2);
}

#[test]
fn decide_allows_iff_user_present_without_error_and_role_listed() {
    let gate = gate();
    let error = SessionError::new("expired");

    for required in Role::all() {
        let requirement = RoleRequirement::new([*required])
            .unwrap_or_else(|_| RoleRequirement::any_role());

        for role in Role::all() {
            let sessions = [
                (Session::authenticated(user(*role)), role == required),
                (Session::new(Some(user(*role)), Some(error.clone())), false),
                (Session::anonymous(), false),
                (Session::failed(error.clone()), false),
            ];

            for (session, expected) in sessions {
                assert_eq!(
                    gate.decide(&session, &requirement).is_allowed(),
                    expected,
                    "session {session:?} against {}",
                    requirement.describe()
                );
            }
        }
    }
}
