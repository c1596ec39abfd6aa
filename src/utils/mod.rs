// Utils compartidos

pub mod dialog;
pub mod google_maps_ffi;
pub mod i18n;
pub mod storage;

pub use dialog::show_alert;
pub use i18n::{t, t_with, Language};
pub use storage::{get_local_storage, load_from_storage, remove_from_storage, save_to_storage, StorageError};
