/// Failure reported by a host notification hook.
///
/// Never escapes the machine: the bridge logs it and carries on.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("host notification hook is not installed")]
    HookMissing,

    #[error("host notification hook failed: {0}")]
    HookFailed(String),
}

/// The page-side shim could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("failed to encode shim script tables: {0}")]
    Encode(#[from] serde_json::Error),
}
