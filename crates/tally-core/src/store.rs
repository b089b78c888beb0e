use serde::Serialize;
use tracing::{
  debug,
  info
};

use crate::config::InputPolicy;
use crate::error::TallyError;
use crate::task::{
  Task,
  TaskId
};

/// Counts derived from the current task list.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct Stats {
  pub total:     usize,
  pub completed: usize,
  pub pending:   usize
}

/// In-memory, insertion-ordered task list.
///
/// The store is the only place tasks are created, flipped or removed.
/// It lives as long as the page that owns it; nothing is persisted.
#[derive(Debug, Clone)]
pub struct TaskStore {
  tasks:   Vec<Task>,
  next_id: u64,
  policy:  InputPolicy
}

impl Default for TaskStore {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskStore {
  pub fn new() -> Self {
    Self::with_policy(
      InputPolicy::default()
    )
  }

  pub fn with_policy(
    policy: InputPolicy
  ) -> Self {
    Self {
      tasks: Vec::new(),
      next_id: 1,
      policy
    }
  }

  pub fn policy(&self) -> InputPolicy {
    self.policy
  }

  #[tracing::instrument(skip_all)]
  pub fn add(
    &mut self,
    text: impl Into<String>
  ) -> Result<&Task, TallyError> {
    let text = text.into();
    if self.policy.rejects(&text) {
      debug!(
        policy = ?self.policy,
        "rejected empty task text"
      );
      return Err(TallyError::EmptyInput);
    }

    let id = TaskId::new(self.next_id);
    self.next_id += 1;

    let index = self.tasks.len();
    self
      .tasks
      .push(Task::new_pending(id, text));
    info!(%id, total = self.tasks.len(), "added task");
    Ok(&self.tasks[index])
  }

  /// Flips the completion flag of `id`. Unknown ids are ignored.
  #[tracing::instrument(skip(self))]
  pub fn toggle(
    &mut self,
    id: TaskId
  ) -> bool {
    match self
      .tasks
      .iter_mut()
      .find(|task| task.id() == id)
    {
      | Some(task) => {
        task.flip();
        debug!(
          completed = task.is_completed(),
          "toggled task"
        );
        true
      }
      | None => {
        debug!("toggle of unknown task ignored");
        false
      }
    }
  }

  /// Removes `id` from the list. Unknown ids are ignored.
  #[tracing::instrument(skip(self))]
  pub fn delete(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(index) = self
      .tasks
      .iter()
      .position(|task| task.id() == id)
    else {
      debug!("delete of unknown task ignored");
      return false;
    };

    self.tasks.remove(index);
    info!(
      total = self.tasks.len(),
      "deleted task"
    );
    true
  }

  pub fn list(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id() == id)
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn stats(&self) -> Stats {
    let total = self.tasks.len();
    let completed = self
      .tasks
      .iter()
      .filter(|task| task.is_completed())
      .count();
    Stats {
      total,
      completed,
      pending: total - completed
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn texts(
    store: &TaskStore
  ) -> Vec<&str> {
    store
      .list()
      .iter()
      .map(Task::text)
      .collect()
  }

  #[test]
  fn add_appends_pending_task() {
    let mut store = TaskStore::new();
    let task = store
      .add("Buy milk")
      .expect("non-empty text");
    assert_eq!(task.text(), "Buy milk");
    assert!(!task.is_completed());

    assert_eq!(
      store.stats(),
      Stats {
        total:     1,
        completed: 0,
        pending:   1
      }
    );
  }

  #[test]
  fn add_rejects_empty_text() {
    let mut store = TaskStore::new();
    let err = store
      .add("")
      .expect_err("empty text");
    assert!(matches!(
      err,
      TallyError::EmptyInput
    ));
    assert!(store.is_empty());
  }

  #[test]
  fn whitespace_is_kept_verbatim_by_default()
  {
    let mut store = TaskStore::new();
    let task = store
      .add("  padded  ")
      .expect("whitespace accepted");
    assert_eq!(task.text(), "  padded  ");
  }

  #[test]
  fn blank_policy_rejects_whitespace() {
    let mut store = TaskStore::with_policy(
      InputPolicy::RejectBlank
    );
    assert!(store.add(" \t ").is_err());
    assert!(store.add(" x ").is_ok());
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn toggle_keeps_order() {
    let mut store = TaskStore::new();
    let a = store
      .add("A")
      .expect("add A")
      .id();
    store.add("B").expect("add B");

    assert!(store.toggle(a));
    assert_eq!(texts(&store), ["A", "B"]);
    assert_eq!(
      store.stats(),
      Stats {
        total:     2,
        completed: 1,
        pending:   1
      }
    );
  }

  #[test]
  fn toggle_and_delete_of_unknown_id_are_noops(
  ) {
    let mut store = TaskStore::new();
    let id = store
      .add("X")
      .expect("add X")
      .id();

    assert!(store.delete(id));
    assert!(!store.delete(id));
    assert!(!store.toggle(id));
    assert!(store.is_empty());
  }

  #[test]
  fn ids_are_not_reused_after_delete() {
    let mut store = TaskStore::new();
    let first = store
      .add("one")
      .expect("add")
      .id();
    store.delete(first);
    let second = store
      .add("two")
      .expect("add")
      .id();
    assert_ne!(first, second);
    assert!(second > first);
  }
}
