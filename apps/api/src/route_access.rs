use hrdesk_core::Role;

/// Roles managing the candidate pipeline.
pub const CANDIDATE_ROLES: [Role; 3] = [Role::Admin, Role::Hr, Role::HodHr];

/// Roles allowed to decide on requests; they also see every request.
pub const APPROVER_ROLES: [Role; 5] = [
    Role::Admin,
    Role::Manager,
    Role::HodHr,
    Role::Ceo,
    Role::Finance,
];

/// Roles drafting and signing contracts.
pub const CONTRACT_ROLES: [Role; 4] = [Role::Admin, Role::Hr, Role::HodHr, Role::Finance];

/// Roles scheduling performance cycles.
pub const PERFORMANCE_ROLES: [Role; 4] = [Role::Admin, Role::Hr, Role::HodHr, Role::Manager];

pub fn is_reviewer(role: Role) -> bool {
    APPROVER_ROLES.contains(&role)
}
