use tally_core::{
  Entry,
  ListAction
};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub entries:   Vec<Entry>,
  pub on_action: Callback<ListAction>
}

/// Resolves a click anywhere in the list to the row control it hit,
/// using the attributes the control carries.
fn action_for_click(
  e: &MouseEvent
) -> Option<ListAction> {
  let control = e
    .target()
    .and_then(|target| {
      target.dyn_into::<Element>().ok()
    })
    .and_then(|element| {
      element
        .closest("button[data-action]")
        .ok()
        .flatten()
    })?;

  let action = control
    .get_attribute("data-action")
    .unwrap_or_default();
  let id = control
    .get_attribute("data-task-id")
    .unwrap_or_default();

  match ListAction::from_control(
    &action, &id
  ) {
    | Ok(action) => Some(action),
    | Err(error) => {
      tracing::warn!(
        %error,
        "ignoring list click"
      );
      None
    }
  }
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let on_click = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |e: MouseEvent| {
        if let Some(action) =
          action_for_click(&e)
        {
          on_action.emit(action);
        }
      }
    )
  };

  html! {
      <ul id="todoList" class="todo-list" onclick={on_click}>
          {
              for props.entries.iter().cloned().map(|entry| match entry {
                  | Entry::Task(row) => {
                      let key = row.id.get();
                      html! { <TaskListRow key={key} row={row} /> }
                  }
                  | Entry::Empty { text } => html! {
                      <li class="empty-state">{ text }</li>
                  }
              })
          }
      </ul>
  }
}
