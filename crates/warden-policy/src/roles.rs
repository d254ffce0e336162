//! Admin-role resolution.
//!
//! Maps configured admin role *names* to the platform's live role *IDs*
//! once at startup. Membership checks afterwards compare IDs only.

use tracing::warn;

use warden_types::{AdminRole, PlatformRole};

/// Resolve the admin-role list from configured names and the guild's
/// live roles.
///
/// Guild role iteration order is preserved and matches are exact
/// (case-sensitive). No deduplication: two platform roles sharing a
/// configured name both become entries. An empty result is not an
/// error, but it denies every admin-gated command until the
/// configuration is fixed and the process restarted.
pub fn resolve(admin_role_names: &[String], platform_roles: &[PlatformRole]) -> Vec<AdminRole> {
    let mut resolved = Vec::new();
    for role in platform_roles {
        for name in admin_role_names {
            if *name != role.name {
                continue;
            }
            resolved.push(AdminRole {
                name: role.name.clone(),
                id: role.id.clone(),
            });
        }
    }

    if resolved.is_empty() {
        warn!("no configured admin role name matches any guild role; all admin commands will be denied");
    }

    resolved
}

/// The resolved admin-role snapshot.
///
/// Computed once per process from the initial configuration; a
/// configuration reload does not refresh it.
#[derive(Debug, Clone, Default)]
pub struct AdminRoleSet {
    roles: Vec<AdminRole>,
}

impl AdminRoleSet {
    /// Resolve and wrap the admin-role list.
    pub fn resolve(admin_role_names: &[String], platform_roles: &[PlatformRole]) -> Self {
        Self {
            roles: resolve(admin_role_names, platform_roles),
        }
    }

    /// The resolved roles, in guild order.
    pub fn roles(&self) -> &[AdminRole] {
        &self.roles
    }

    /// True iff the member's role-ID set intersects the admin-role IDs.
    pub fn is_admin(&self, member_role_ids: &[String]) -> bool {
        self.roles
            .iter()
            .any(|admin| member_role_ids.iter().any(|id| *id == admin.id))
    }
}
