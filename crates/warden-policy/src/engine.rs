//! The policy engine: the single authorization entry point.

use std::sync::Arc;

use warden_config::ConfigStore;
use warden_types::PlatformRole;

use crate::restrictions::RestrictionEvaluator;
use crate::roles::AdminRoleSet;

/// Composes the admin-role snapshot and the restriction table.
///
/// Both are snapshotted from the configuration record at construction
/// and survive `reloadconfig` unchanged; matching the long-standing
/// behavior of the bot, a role or restriction change takes effect only
/// on restart. The ignored-user check is the exception: it reads the
/// live record on every call.
pub struct PolicyEngine {
    admin_roles: AdminRoleSet,
    restrictions: RestrictionEvaluator,
    store: Arc<ConfigStore>,
}

impl PolicyEngine {
    /// Build the engine from the store's current record and the guild's
    /// live role list.
    pub fn new(store: Arc<ConfigStore>, platform_roles: &[PlatformRole]) -> Self {
        let (admin_roles, restrictions) = store.read(|record| {
            (
                AdminRoleSet::resolve(&record.admin_roles, platform_roles),
                RestrictionEvaluator::new(record.command_restrictions.clone()),
            )
        });

        Self {
            admin_roles,
            restrictions,
            store,
        }
    }

    /// True iff the caller's role-ID set intersects the admin snapshot.
    pub fn is_admin(&self, member_role_ids: &[String]) -> bool {
        self.admin_roles.is_admin(member_role_ids)
    }

    /// True iff `command` may run in `channel_id` under the restriction
    /// table.
    pub fn is_allowed(&self, command: &str, channel_id: &str) -> bool {
        self.restrictions.is_allowed(command, channel_id)
    }

    /// True iff the user is on the live ignored list.
    pub fn is_ignored(&self, user_id: &str) -> bool {
        self.store
            .read(|record| record.ignored_users.iter().any(|u| u == user_id))
    }

    /// The admin-role snapshot.
    pub fn admin_roles(&self) -> &AdminRoleSet {
        &self.admin_roles
    }

    /// The configuration store this engine reads from.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }
}
