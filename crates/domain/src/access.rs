use std::collections::BTreeSet;

use hrdesk_core::{AppError, AppResult, Role};

/// Non-empty set of roles permitted to reach a protected resource.
///
/// Membership is exact: there is no inheritance between roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    roles: BTreeSet<Role>,
}

impl RoleRequirement {
    /// Creates a requirement from the permitted roles.
    ///
    /// An empty set is a wiring mistake and fails with
    /// [`AppError::Configuration`].
    pub fn new(roles: impl IntoIterator<Item = Role>) -> AppResult<Self> {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(AppError::Configuration(
                "role requirement must list at least one role".to_owned(),
            ));
        }

        Ok(Self { roles })
    }

    /// Creates a requirement satisfied by every known role.
    #[must_use]
    pub fn any_role() -> Self {
        Self {
            roles: Role::all().iter().copied().collect(),
        }
    }

    /// Returns whether the role is listed.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns the permitted roles in stable order.
    #[must_use]
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    /// Returns a comma separated list of transport values, for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use hrdesk_core::{AppError, Role};
    use proptest::prelude::*;

    use super::RoleRequirement;

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::all().to_vec())
    }

    #[test]
    fn empty_requirement_is_a_configuration_error() {
        let result = RoleRequirement::new(Vec::<Role>::new());
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn senior_roles_do_not_inherit_access() {
        let requirement = RoleRequirement::new([Role::Hr]);
        assert!(requirement.is_ok());
        let requirement = requirement.unwrap_or_else(|_| RoleRequirement::any_role());

        assert!(requirement.permits(Role::Hr));
        assert!(!requirement.permits(Role::Ceo));
        assert!(!requirement.permits(Role::HodHr));
        assert!(!requirement.permits(Role::Admin));
    }

    #[test]
    fn any_role_permits_every_role() {
        let requirement = RoleRequirement::any_role();
        assert!(Role::all().iter().all(|role| requirement.permits(*role)));
    }

    #[test]
    fn describe_lists_roles_in_stable_order() {
        let requirement = RoleRequirement::new([Role::HodHr, Role::Admin, Role::Hr]);
        assert_eq!(
            requirement.map(|value| value.describe()).unwrap_or_default(),
            "ADMIN,HR,HOD_HR"
        );
    }

    proptest! {
        #[test]
        fn permits_is_exact_membership(
            listed in prop::collection::vec(role_strategy(), 1..6),
            probe in role_strategy(),
        ) {
            let requirement = RoleRequirement::new(listed.clone());
            prop_assert!(requirement.is_ok());
            let requirement = requirement.unwrap_or_else(|_| RoleRequirement::any_role());
            prop_assert_eq!(requirement.permits(probe), listed.contains(&probe));
        }

        #[test]
        fn duplicates_collapse_without_changing_membership(
            role in role_strategy(),
            repeats in 1usize..5,
        ) {
            let requirement = RoleRequirement::new(std::iter::repeat_n(role, repeats));
            prop_assert!(requirement.is_ok());
            let roles: Vec<Role> = requirement
                .map(|value| value.roles().collect())
                .unwrap_or_default();
            prop_assert_eq!(roles, vec![role]);
        }
    }
}
