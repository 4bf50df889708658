mod sync;

pub use sync::SyncArgs;
pub use sync::handle_sync;
