use tally_core::{
  ListAction,
  TaskRow
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row: TaskRow
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let id = row.id.to_string();

  html! {
      <li class={row.class()}>
          <span class="todo-text">{ &row.text }</span>
          <button
              class="complete-btn"
              data-action={ListAction::Toggle(row.id).name()}
              data-task-id={id.clone()}
          >
              { &row.toggle_label }
          </button>
          <button
              class="delete-btn"
              data-action={ListAction::Delete(row.id).name()}
              data-task-id={id}
          >
              { &row.delete_label }
          </button>
      </li>
  }
}
