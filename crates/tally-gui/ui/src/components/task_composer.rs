use tally_core::SubmitTrigger;
use web_sys::KeyboardEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskComposerProps {
  pub input_ref:   NodeRef,
  pub placeholder: String,
  pub add_label:   String,
  pub on_submit:
    Callback<SubmitTrigger>
}

#[function_component(TaskComposer)]
pub fn task_composer(
  props: &TaskComposerProps
) -> Html {
  let on_click = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit
          .emit(SubmitTrigger::Click);
      }
    )
  };
  let on_keypress = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        on_submit.emit(
          SubmitTrigger::Key(e.key())
        );
      }
    )
  };

  html! {
      <div class="input-section">
          <input
              id="taskInput"
              type="text"
              ref={props.input_ref.clone()}
              placeholder={props.placeholder.clone()}
              onkeypress={on_keypress}
          />
          <button id="addBtn" onclick={on_click}>
              { &props.add_label }
          </button>
      </div>
  }
}
