pub mod enums;
pub mod error;
pub mod form;
pub mod store;
pub mod task;

pub use enums::{DialogState, FormField, RenamePolicy};
pub use error::TaskError;
pub use form::TaskForm;
pub use store::TaskStore;
pub use task::Task;
