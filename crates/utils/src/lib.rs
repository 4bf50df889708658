mod display_bump;
mod list_directory;
mod workspace_root;

pub use display_bump::display_bump;
pub use list_directory::list_directory;
pub use workspace_root::{WORKSPACE_ENV, workspace_root};
