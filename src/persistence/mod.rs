pub mod files;
pub mod kv;
pub mod snapshot;

pub use files::{
    atomic_write, config_file, ensure_dir, export_file, get_data_dir, init_local_data_dir,
    log_file,
};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use snapshot::{load_snapshot, save_snapshot};
