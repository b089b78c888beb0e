use serde::Serialize;

use crate::config::UiConfig;
use crate::store::{
  Stats,
  TaskStore
};
use crate::task::{
  Task,
  TaskId
};

/// One rendered task with the labels of its two controls.
#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct TaskRow {
  pub id:           TaskId,
  pub text:         String,
  pub completed:    bool,
  pub toggle_label: String,
  pub delete_label: String
}

impl TaskRow {
  pub fn class(&self) -> &'static str {
    if self.completed {
      "todo-item completed"
    } else {
      "todo-item"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub enum Entry {
  Task(TaskRow),
  Empty { text: String }
}

/// Everything the page shows for one store state.
#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct ListView {
  pub entries: Vec<Entry>,
  pub summary: String,
  pub stats:   Stats
}

impl ListView {
  pub fn is_empty_state(&self) -> bool {
    matches!(
      self.entries.as_slice(),
      [Entry::Empty { .. }]
    )
  }

  pub fn rows(
    &self
  ) -> impl Iterator<Item = &TaskRow> {
    self.entries.iter().filter_map(
      |entry| match entry {
        | Entry::Task(row) => Some(row),
        | Entry::Empty { .. } => None
      }
    )
  }
}

pub fn summary(stats: &Stats) -> String {
  format!(
    "You have {} tasks ({} completed, \
     {} pending)",
    stats.total,
    stats.completed,
    stats.pending
  )
}

/// Rebuilds the whole view from a store snapshot; no incremental state
/// is kept between calls.
#[derive(Debug, Clone)]
pub struct Renderer {
  done_label:   String,
  undo_label:   String,
  delete_label: String,
  empty_state:  String
}

impl Renderer {
  pub fn new(cfg: &UiConfig) -> Self {
    Self {
      done_label:   cfg.done_label.clone(),
      undo_label:   cfg.undo_label.clone(),
      delete_label: cfg
        .delete_label
        .clone(),
      empty_state:  cfg
        .empty_state
        .clone()
    }
  }

  #[tracing::instrument(skip_all, fields(total = store.len()))]
  pub fn render(
    &self,
    store: &TaskStore
  ) -> ListView {
    let stats = store.stats();
    let entries = if store.is_empty() {
      vec![Entry::Empty {
        text: self.empty_state.clone()
      }]
    } else {
      store
        .list()
        .iter()
        .map(|task| {
          Entry::Task(self.row(task))
        })
        .collect()
    };

    ListView {
      entries,
      summary: summary(&stats),
      stats
    }
  }

  fn row(&self, task: &Task) -> TaskRow {
    let toggle_label =
      if task.is_completed() {
        &self.undo_label
      } else {
        &self.done_label
      };

    TaskRow {
      id:           task.id(),
      text:         task
        .text()
        .to_string(),
      completed:    task.is_completed(),
      toggle_label: toggle_label.clone(),
      delete_label: self
        .delete_label
        .clone()
    }
  }
}
