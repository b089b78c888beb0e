use gloo::console::log;
use tally_core::{
  Notifier,
  TaskInput
};
use web_sys::HtmlInputElement;
use yew::NodeRef;

/// The task text field, looked up through its `NodeRef` on every read.
pub struct DomInput {
  node: NodeRef
}

impl DomInput {
  pub fn new(node: NodeRef) -> Self {
    Self { node }
  }

  fn element(
    &self
  ) -> Option<HtmlInputElement> {
    self
      .node
      .cast::<HtmlInputElement>()
  }
}

impl TaskInput for DomInput {
  fn text(&self) -> String {
    self
      .element()
      .map(|input| input.value())
      .unwrap_or_default()
  }

  fn clear(&mut self) {
    if let Some(input) = self.element()
    {
      input.set_value("");
    }
  }
}

/// Blocking `window.alert`.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
  fn notify(&self, message: &str) {
    let Some(window) = web_sys::window()
    else {
      tracing::warn!(
        alert = message,
        "no window to alert on"
      );
      return;
    };

    if let Err(error) =
      window.alert_with_message(message)
    {
      tracing::error!(
        ?error,
        "alert failed"
      );
    }
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
