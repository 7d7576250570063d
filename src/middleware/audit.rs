use crate::models::User;

/// Record a mutation on the `audit` log target. Called explicitly in handlers
/// after the write has committed.
pub fn log_event(actor: &User, action: &str, resource_type: &str, resource_id: i64) {
    tracing::info!(
        target: "audit",
        actor = %actor.username,
        actor_id = actor.id,
        action,
        resource_type,
        resource_id,
        "audit event"
    );
}
