//! Integration tests for the authorization gates: ignored users,
//! admin snapshot, and channel restrictions through the router.

mod common;

use common::{admin_ctx, harness, harness_with, ignored_ctx, sample_config};

use warden_types::{CommandRestriction, RestrictionMode, WardenError};

#[test]
fn ignored_user_is_dropped_without_mutation() {
    let h = harness();

    let outcome = h
        .router
        .dispatch("setconfig", &ignored_ctx("C-general", &["CommandKey", "$$"]))
        .unwrap();
    assert!(outcome.is_none(), "ignored users get no response at all");
    assert_eq!(h.store.snapshot().command_key, "!");
}

#[test]
fn blacklisted_channel_rejects_the_command() {
    let h = harness();

    // sample_config blacklists setconfig in C-public.
    let err = h
        .router
        .dispatch("setconfig", &admin_ctx("C-public", &["CommandKey", "$$"]))
        .unwrap_err();
    assert!(matches!(
        err,
        WardenError::RestrictionViolation { ref channel, .. } if channel == "C-public"
    ));
    assert_eq!(h.store.snapshot().command_key, "!");

    // The same admin succeeds from any other channel.
    let result = h
        .router
        .dispatch("setconfig", &admin_ctx("C-staff", &["CommandKey", "$$"]))
        .unwrap()
        .unwrap();
    assert!(result.success);
}

#[test]
fn whitelisted_command_runs_only_in_listed_channels() {
    let mut config = sample_config();
    config.command_restrictions = vec![CommandRestriction {
        command: "getconfig".into(),
        mode: RestrictionMode::Whitelist,
        channels: vec!["C-staff".into()],
    }];
    let h = harness_with(config);

    assert!(h
        .router
        .dispatch("getconfig", &admin_ctx("C-staff", &[]))
        .unwrap()
        .unwrap()
        .success);

    let err = h
        .router
        .dispatch("getconfig", &admin_ctx("C-general", &[]))
        .unwrap_err();
    assert!(matches!(err, WardenError::RestrictionViolation { .. }));
}

#[test]
fn admin_snapshot_is_stale_after_reload() {
    let h = harness();

    // Swap the admin role on disk from Moderators to Members and reload.
    let mut on_disk = sample_config();
    on_disk.admin_roles = vec!["Members".into()];
    h.write_document(&on_disk);
    h.router
        .dispatch("reloadconfig", &admin_ctx("C-general", &[]))
        .unwrap()
        .unwrap();

    // The snapshot still honors the old role set: the Moderator is
    // still an admin, the Member still is not.
    assert!(h
        .router
        .dispatch("getconfig", &admin_ctx("C-general", &[]))
        .unwrap()
        .unwrap()
        .success);
    let err = h
        .router
        .dispatch("getconfig", &common::member_ctx("C-general", &[]))
        .unwrap_err();
    assert!(matches!(err, WardenError::PermissionDenied { .. }));
}

#[test]
fn ignored_list_is_live_after_reload() {
    let h = harness();

    // Put the admin on the ignored list on disk, then reload.
    let mut on_disk = sample_config();
    on_disk.ignored_users = vec!["u-admin".into()];
    h.write_document(&on_disk);
    h.router
        .dispatch("reloadconfig", &admin_ctx("C-general", &[]))
        .unwrap()
        .unwrap();

    // Unlike the admin snapshot, the ignored list takes effect at once.
    let outcome = h
        .router
        .dispatch("getconfig", &admin_ctx("C-general", &[]))
        .unwrap();
    assert!(outcome.is_none());
}

#[test]
fn restriction_gate_runs_after_admin_gate() {
    let h = harness();

    // A non-admin in the blacklisted channel hits the admin gate first.
    let err = h
        .router
        .dispatch(
            "setconfig",
            &common::member_ctx("C-public", &["CommandKey", "x"]),
        )
        .unwrap_err();
    assert!(matches!(err, WardenError::PermissionDenied { .. }));
}
