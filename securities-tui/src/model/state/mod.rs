//! 页面数据状态

mod detail;
mod list;
mod modal;
mod status;

pub use detail::{DetailState, VersionsState};
pub use list::ListState;
pub use modal::{FieldInput, FilterForm, FormField, InputForm, Modal, ModalState};
pub use status::StatusState;
