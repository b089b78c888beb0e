use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskSummaryProps {
  pub summary: String
}

#[function_component(TaskSummary)]
pub fn task_summary(
  props: &TaskSummaryProps
) -> Html {
  html! {
      <p id="stats" class="stats">{ &props.summary }</p>
  }
}
