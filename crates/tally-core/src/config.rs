use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::error::TallyError;

/// Which task texts `add` turns away.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
  /// Only the exact empty string is rejected; whitespace is kept
  /// verbatim.
  #[default]
  RejectEmpty,
  /// Whitespace-only text is rejected as well.
  RejectBlank
}

impl InputPolicy {
  pub fn rejects(
    self,
    text: &str
  ) -> bool {
    match self {
      | Self::RejectEmpty => {
        text.is_empty()
      }
      | Self::RejectBlank => {
        text.trim().is_empty()
      }
    }
  }
}

/// Labels and policy for the to-do page.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub title:               String,
  pub input_placeholder:   String,
  pub add_label:           String,
  pub done_label:          String,
  pub undo_label:          String,
  pub delete_label:        String,
  pub empty_state:         String,
  pub empty_input_message: String,
  pub input_policy:        InputPolicy
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      title:               "My To-Do List"
        .to_string(),
      input_placeholder:   "What needs \
                            to be done?"
        .to_string(),
      add_label:           "Add"
        .to_string(),
      done_label:          "Done"
        .to_string(),
      undo_label:          "Undo"
        .to_string(),
      delete_label:        "Delete"
        .to_string(),
      empty_state:         "No tasks \
                            yet. Add one \
                            above! 🎯"
        .to_string(),
      empty_input_message: "Please \
                            enter a \
                            task!"
        .to_string(),
      input_policy:
        InputPolicy::default()
    }
  }
}

impl UiConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, TallyError> {
    let cfg =
      toml::from_str::<Self>(raw)?;
    debug!(
      policy = ?cfg.input_policy,
      "parsed ui config"
    );
    Ok(cfg)
  }
}
