mod load;
mod mount_table;

pub use load::{load_mount_table, save_mount_table};
pub use mount_table::{MountTable, UncMount, WindowsVolume};
