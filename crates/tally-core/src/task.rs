use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

use crate::error::TallyError;

/// Identifier handed out by a [`crate::TaskStore`].
///
/// Ids are assigned from a per-store counter and never reused, so two
/// tasks of the same store never share one.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
  pub(crate) fn new(raw: u64) -> Self {
    Self(raw)
  }

  pub fn get(self) -> u64 {
    self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for TaskId {
  type Err = TallyError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    raw
      .trim()
      .parse::<u64>()
      .map(Self)
      .map_err(|_| {
        TallyError::InvalidTaskId(
          raw.to_string()
        )
      })
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  id:        TaskId,
  text:      String,
  completed: bool
}

impl Task {
  pub(crate) fn new_pending(
    id: TaskId,
    text: String
  ) -> Self {
    Self {
      id,
      text,
      completed: false
    }
  }

  pub fn id(&self) -> TaskId {
    self.id
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_completed(&self) -> bool {
    self.completed
  }

  pub(crate) fn flip(&mut self) {
    self.completed = !self.completed;
  }
}
