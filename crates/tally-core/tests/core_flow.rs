use std::cell::Cell;

use tally_core::{
  Entry,
  InputController,
  InputPolicy,
  ListAction,
  Notifier,
  Stats,
  TallyError,
  TaskInput,
  TaskStore,
  UiConfig
};

#[derive(Default)]
struct CountingNotifier {
  alerts: Cell<usize>
}

impl Notifier for CountingNotifier {
  fn notify(&self, _message: &str) {
    self.alerts.set(self.alerts.get() + 1);
  }
}

struct Field {
  value:   String,
  cleared: bool
}

impl Field {
  fn with(value: &str) -> Self {
    Self {
      value:   value.to_string(),
      cleared: false
    }
  }
}

impl TaskInput for Field {
  fn text(&self) -> String {
    self.value.clone()
  }

  fn clear(&mut self) {
    self.value.clear();
    self.cleared = true;
  }
}

#[test]
fn buy_milk_scenario() {
  let mut store = TaskStore::new();
  store
    .add("Buy milk")
    .expect("add should succeed");

  let list = store.list();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0].text(), "Buy milk");
  assert!(!list[0].is_completed());
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
fn add_then_delete_shows_placeholder() {
  let mut ctl = InputController::new(
    &UiConfig::default(),
    CountingNotifier::default()
  );
  let mut field = Field::with("X");
  let id = ctl
    .submit(&mut field)
    .expect("add X");
  assert!(field.cleared);

  ctl.dispatch(ListAction::Delete(id));

  assert!(ctl.store().list().is_empty());
  assert!(ctl.view().is_empty_state());
  assert!(matches!(
    ctl.view().entries.as_slice(),
    [Entry::Empty { text }] if text.starts_with("No tasks yet")
  ));
}

#[test]
fn empty_submit_leaves_everything_alone() {
  let mut ctl = InputController::new(
    &UiConfig::default(),
    CountingNotifier::default()
  );
  let mut seeded = Field::with("keep me");
  ctl.submit(&mut seeded).expect("seed");
  let before: Vec<_> =
    ctl.store().list().to_vec();

  let mut field = Field::with("");
  let result = ctl.submit(&mut field);

  assert!(matches!(
    result,
    Err(TallyError::EmptyInput)
  ));
  assert_eq!(ctl.notifier().alerts.get(), 1);
  assert!(!field.cleared);
  assert_eq!(ctl.store().list(), before);
}

#[test]
fn blank_policy_keeps_whitespace_in_field() {
  let cfg = UiConfig {
    input_policy: InputPolicy::RejectBlank,
    ..UiConfig::default()
  };
  let mut ctl = InputController::new(
    &cfg,
    CountingNotifier::default()
  );
  let mut field = Field::with("   ");

  assert!(ctl.submit(&mut field).is_err());
  assert_eq!(field.value, "   ");
  assert!(!field.cleared);
  assert_eq!(ctl.notifier().alerts.get(), 1);
}

#[test]
fn delegated_controls_round_trip_through_attributes() {
  let mut ctl = InputController::new(
    &UiConfig::default(),
    CountingNotifier::default()
  );
  ctl
    .submit(&mut Field::with("A"))
    .expect("add A");
  ctl
    .submit(&mut Field::with("B"))
    .expect("add B");

  let first = ctl
    .view()
    .rows()
    .next()
    .expect("row for A")
    .id;
  let carried = first.to_string();
  let action = ListAction::from_control(
    ListAction::Toggle(first).name(),
    &carried
  )
  .expect("decodes");
  ctl.dispatch(action);

  let texts: Vec<&str> = ctl
    .view()
    .rows()
    .map(|row| row.text.as_str())
    .collect();
  assert_eq!(texts, ["A", "B"]);
  assert_eq!(
    ctl.view().summary,
    "You have 2 tasks (1 completed, 1 pending)"
  );
}

#[test]
fn independent_controllers_do_not_share_state() {
  let mut left = InputController::new(
    &UiConfig::default(),
    CountingNotifier::default()
  );
  let right = InputController::new(
    &UiConfig::default(),
    CountingNotifier::default()
  );
  left
    .submit(&mut Field::with("only left"))
    .expect("add");

  assert_eq!(left.store().len(), 1);
  assert!(right.store().is_empty());
}
