use async_trait::async_trait;
use axum::extract::{Extension, Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use hrdesk_application::{GateDecision, SessionResolver};
use hrdesk_core::{AppError, Session as GateSession, SessionError, SessionUser};
use hrdesk_domain::RoleRequirement;
use tower_sessions::Session;
use tracing::{debug, info};
use url::Url;

use crate::auth::SESSION_USER_KEY;
use crate::error::ApiResult;
use crate::state::AppState;

/// Reads the signed-in user from the cookie-backed session store.
pub struct TowerSessionResolver<'a> {
    session: &'a Session,
}

impl<'a> TowerSessionResolver<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionResolver for TowerSessionResolver<'_> {
    async fn resolve_session(&self) -> GateSession {
        match self.session.get::<SessionUser>(SESSION_USER_KEY).await {
            Ok(Some(user)) => GateSession::authenticated(user),
            Ok(None) => GateSession::anonymous(),
            Err(error) => GateSession::failed(SessionError::new(format!(
                "failed to read session user: {error}"
            ))),
        }
    }
}

/// Lets the request through only for the roles attached to the route group.
pub async fn require_roles(
    State(state): State<AppState>,
    Extension(requirement): Extension<RoleRequirement>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let resolver = TowerSessionResolver::new(&session);
    let decision = state
        .access_gate
        .authorize_requirement(&resolver, &requirement)
        .await;

    match decision {
        GateDecision::Allowed(user) => {
            debug!(
                subject = user.id(),
                role = %user.role(),
                path = %request.uri().path(),
                "access granted"
            );
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        GateDecision::Denied(denial) => {
            info!(
                reason = denial.reason.as_str(),
                required = %requirement.describe(),
                path = %request.uri().path(),
                "access denied"
            );
            Redirect::to(denial.redirect_to.as_str()).into_response()
        }
    }
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if let Some(fetch_site) = headers.get("sec-fetch-site")
            && fetch_site == HeaderValue::from_static("cross-site")
        {
            return Err(AppError::Forbidden("cross-site request blocked".to_owned()).into());
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let allowed_origin = state.frontend_url.as_str();
        let origin_is_allowed = origin == allowed_origin;
        let referer_is_allowed = referer_origin(referer).as_deref() == Some(allowed_origin);

        if !origin_is_allowed && !referer_is_allowed {
            return Err(AppError::Forbidden("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn referer_origin(referer: &str) -> Option<String> {
    let url = Url::parse(referer).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}
