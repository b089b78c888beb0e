pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod store;
pub mod task;

pub use config::{
  InputPolicy,
  UiConfig
};
pub use controller::{
  InputController,
  ListAction,
  Notifier,
  SubmitTrigger,
  TaskInput
};
pub use error::TallyError;
pub use render::{
  Entry,
  ListView,
  Renderer,
  TaskRow
};
pub use store::{
  Stats,
  TaskStore
};
pub use task::{
  Task,
  TaskId
};
