//! Error types for the task store and its controller.

/// Errors raised by the core.
///
/// Only [`TallyError::EmptyInput`] is ever shown to the user; the rest
/// describe malformed host input and are logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
  /// Submit was triggered without any task text.
  #[error("task text is empty")]
  EmptyInput,

  /// A list control carried an id that does not parse.
  #[error("invalid task id: {0:?}")]
  InvalidTaskId(String),

  /// A list control carried an action name we do not know.
  #[error("unknown list action: {0:?}")]
  UnknownAction(String),

  /// The embedded UI configuration is not valid TOML.
  #[error("invalid ui config: {0}")]
  Config(#[from] toml::de::Error)
}
