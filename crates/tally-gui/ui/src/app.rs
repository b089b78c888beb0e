use tally_core::{
  InputController,
  ListAction,
  SubmitTrigger,
  UiConfig
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_node_ref,
  use_state
};

use crate::components::{
  TaskComposer,
  TaskList,
  TaskSummary
};
use crate::dom::{
  BrowserNotifier,
  DomInput,
  ui_debug
};

const UI_CONFIG_TOML: &str =
  include_str!("../assets/ui.toml");

fn load_ui_config() -> UiConfig {
  match UiConfig::from_toml_str(
    UI_CONFIG_TOML
  ) {
    | Ok(cfg) => {
      tracing::info!(
        policy = ?cfg.input_policy,
        "loaded ui config"
      );
      cfg
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse ui config; using defaults");
      UiConfig::default()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_memo((), |_| load_ui_config());
  let controller = {
    let config = config.clone();
    use_mut_ref(move || {
      InputController::new(
        &config,
        BrowserNotifier
      )
    })
  };
  let view = {
    let controller = controller.clone();
    use_state(move || {
      controller.borrow().view().clone()
    })
  };
  let input_ref = use_node_ref();

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "controller created and \
         initial list rendered"
      );
      || ()
    });
  }

  let on_submit = {
    let controller = controller.clone();
    let view = view.clone();
    let input_ref = input_ref.clone();
    Callback::from(
      move |trigger: SubmitTrigger| {
        let mut input =
          DomInput::new(input_ref.clone());
        let result = controller
          .borrow_mut()
          .on_trigger(&trigger, &mut input);
        match result {
          | Ok(Some(id)) => {
            ui_debug(
              "task.added",
              &id.to_string()
            );
            view.set(
              controller
                .borrow()
                .view()
                .clone()
            );
          }
          | Ok(None) => {}
          | Err(error) => {
            tracing::debug!(
              %error,
              "submit rejected"
            );
          }
        }
      }
    )
  };

  let on_action = {
    let controller = controller.clone();
    let view = view.clone();
    Callback::from(
      move |action: ListAction| {
        ui_debug(
          &format!(
            "task.{}",
            action.name()
          ),
          &action.id().to_string()
        );
        let mut controller =
          controller.borrow_mut();
        controller.dispatch(action);
        view.set(
          controller.view().clone()
        );
      }
    )
  };

  html! {
      <div class="container">
          <h1>{ &config.title }</h1>
          <TaskComposer
              input_ref={input_ref}
              placeholder={config.input_placeholder.clone()}
              add_label={config.add_label.clone()}
              on_submit={on_submit}
          />
          <TaskList
              entries={view.entries.clone()}
              on_action={on_action}
          />
          <TaskSummary summary={view.summary.clone()} />
      </div>
  }
}
