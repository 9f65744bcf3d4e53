use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::{Extension, Router};
use hrdesk_core::{AppError, Role};
use hrdesk_domain::RoleRequirement;
use tower_http::trace::TraceLayer;

use crate::route_access::{APPROVER_ROLES, CANDIDATE_ROLES, CONTRACT_ROLES, PERFORMANCE_ROLES};
use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod cors;

#[cfg(test)]
mod tests;

/// Builds the HTTP router. The caller adds the session layer.
pub fn build_router(app_state: AppState) -> Result<Router, AppError> {
    let any_role_routes = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route(
            "/api/dashboard/stats",
            get(handlers::dashboard::dashboard_stats_handler),
        )
        .route(
            "/api/requests",
            get(handlers::requests::list_requests_handler)
                .post(handlers::requests::submit_request_handler),
        )
        .route(
            "/api/requests/{request_id}",
            get(handlers::requests::get_request_handler),
        );

    let candidate_routes = Router::new()
        .route(
            "/api/candidates",
            get(handlers::candidates::list_candidates_handler)
                .post(handlers::candidates::register_candidate_handler),
        )
        .route(
            "/api/candidates/{candidate_id}",
            get(handlers::candidates::get_candidate_handler),
        )
        .route(
            "/api/candidates/{candidate_id}/hire",
            post(handlers::candidates::hire_candidate_handler),
        );

    let approval_routes = Router::new().route(
        "/api/requests/{request_id}/approvals",
        get(handlers::approvals::list_approvals_handler)
            .post(handlers::approvals::record_approval_handler),
    );

    let contract_routes = Router::new()
        .route(
            "/api/contracts",
            get(handlers::contracts::list_contracts_handler)
                .post(handlers::contracts::draft_contract_handler),
        )
        .route(
            "/api/contracts/{contract_id}",
            get(handlers::contracts::get_contract_handler),
        )
        .route(
            "/api/contracts/{contract_id}/sign",
            post(handlers::contracts::sign_contract_handler),
        );

    let performance_routes = Router::new().route(
        "/api/performance-cycles",
        get(handlers::performance::list_performance_cycles_handler)
            .post(handlers::performance::open_performance_cycle_handler),
    );

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/bootstrap", post(auth::bootstrap_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .merge(gated(
            any_role_routes,
            &app_state,
            RoleRequirement::any_role(),
        ))
        .merge(gated(
            candidate_routes,
            &app_state,
            requirement(&CANDIDATE_ROLES)?,
        ))
        .merge(gated(
            approval_routes,
            &app_state,
            requirement(&APPROVER_ROLES)?,
        ))
        .merge(gated(
            contract_routes,
            &app_state,
            requirement(&CONTRACT_ROLES)?,
        ))
        .merge(gated(
            performance_routes,
            &app_state,
            requirement(&PERFORMANCE_ROLES)?,
        ))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(&app_state.frontend_url)?)
        .with_state(app_state);

    Ok(app)
}

fn requirement(roles: &[Role]) -> Result<RoleRequirement, AppError> {
    RoleRequirement::new(roles.iter().copied())
}

fn gated(
    routes: Router<AppState>,
    app_state: &AppState,
    requirement: RoleRequirement,
) -> Router<AppState> {
    routes
        .route_layer(from_fn_with_state(app_state.clone(), middleware::require_roles))
        .layer(Extension(requirement))
}
