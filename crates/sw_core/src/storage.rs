use async_trait::async_trait;

/// Durable, append-only record of article ids that have already been
/// processed. The single source of deduplication truth.
///
/// Implementations never surface storage errors: a set that cannot be read
/// counts as empty, and an id that cannot be recorded reports `false` from
/// `try_add`.
#[async_trait]
pub trait ProcessedStore: Send + Sync {
    /// Membership test against durable state.
    async fn contains(&self, id: &str) -> bool;

    /// Appends `id` and persists the set. Returns `false` when the id was
    /// already present or the write failed, `true` once the id is durably
    /// recorded.
    async fn try_add(&self, id: &str) -> bool;
}
