//! Bridges page events to store mutations.
//!
//! Every handler runs to completion: mutate the store, then rebuild the
//! [`ListView`] from scratch. The host only has to publish
//! [`InputController::view`] after each call.

use tracing::{
  debug,
  warn
};

use crate::config::UiConfig;
use crate::error::TallyError;
use crate::render::{
  ListView,
  Renderer
};
use crate::store::TaskStore;
use crate::task::TaskId;

/// The text-entry control.
pub trait TaskInput {
  fn text(&self) -> String;
  fn clear(&mut self);
}

/// Blocking, user-visible feedback (an alert on the web).
pub trait Notifier {
  fn notify(&self, message: &str);
}

const TOGGLE_ACTION: &str = "toggle";
const DELETE_ACTION: &str = "delete";
const CONFIRM_KEY: &str = "Enter";

/// A list control activation, decoded from the attributes the control
/// carries.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ListAction {
  Toggle(TaskId),
  Delete(TaskId)
}

impl ListAction {
  pub fn from_control(
    action: &str,
    id: &str
  ) -> Result<Self, TallyError> {
    let id = id.parse::<TaskId>()?;
    match action {
      | TOGGLE_ACTION => {
        Ok(Self::Toggle(id))
      }
      | DELETE_ACTION => {
        Ok(Self::Delete(id))
      }
      | other => Err(
        TallyError::UnknownAction(
          other.to_string()
        )
      )
    }
  }

  /// Value for the control's `data-action` attribute.
  pub fn name(self) -> &'static str {
    match self {
      | Self::Toggle(_) => TOGGLE_ACTION,
      | Self::Delete(_) => DELETE_ACTION
    }
  }

  pub fn id(self) -> TaskId {
    match self {
      | Self::Toggle(id)
      | Self::Delete(id) => id
    }
  }
}

/// What asked for a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTrigger {
  Click,
  Key(String)
}

impl SubmitTrigger {
  pub fn is_confirm(&self) -> bool {
    match self {
      | Self::Click => true,
      | Self::Key(key) => {
        key.as_str() == CONFIRM_KEY
      }
    }
  }
}

pub struct InputController<N> {
  store:               TaskStore,
  renderer:            Renderer,
  notifier:            N,
  empty_input_message: String,
  view:                ListView
}

impl<N: Notifier> InputController<N> {
  pub fn new(
    cfg: &UiConfig,
    notifier: N
  ) -> Self {
    let store = TaskStore::with_policy(
      cfg.input_policy
    );
    let renderer = Renderer::new(cfg);
    let view = renderer.render(&store);
    Self {
      store,
      renderer,
      notifier,
      empty_input_message: cfg
        .empty_input_message
        .clone(),
      view
    }
  }

  pub fn view(&self) -> &ListView {
    &self.view
  }

  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn notifier(&self) -> &N {
    &self.notifier
  }

  /// Adds the input's text as a new task and clears the input.
  ///
  /// Empty text is reported through the notifier and leaves both the
  /// store and the input untouched.
  #[tracing::instrument(skip_all)]
  pub fn submit<I>(
    &mut self,
    input: &mut I
  ) -> Result<TaskId, TallyError>
  where
    I: TaskInput + ?Sized
  {
    let text = input.text();
    let id = match self.store.add(text) {
      | Ok(task) => task.id(),
      | Err(err) => {
        warn!(%err, "submit rejected");
        self
          .notifier
          .notify(&self.empty_input_message);
        return Err(err);
      }
    };

    input.clear();
    self.refresh();
    Ok(id)
  }

  /// Routes a trigger to [`Self::submit`]; keys other than the confirm
  /// key do nothing.
  pub fn on_trigger<I>(
    &mut self,
    trigger: &SubmitTrigger,
    input: &mut I
  ) -> Result<Option<TaskId>, TallyError>
  where
    I: TaskInput + ?Sized
  {
    if !trigger.is_confirm() {
      return Ok(None);
    }
    self.submit(input).map(Some)
  }

  #[tracing::instrument(skip(self))]
  pub fn dispatch(
    &mut self,
    action: ListAction
  ) {
    let changed = match action {
      | ListAction::Toggle(id) => {
        self.store.toggle(id)
      }
      | ListAction::Delete(id) => {
        self.store.delete(id)
      }
    };
    debug!(changed, "dispatched list action");
    self.refresh();
  }

  fn refresh(&mut self) {
    self.view =
      self.renderer.render(&self.store);
  }
}
