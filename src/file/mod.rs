pub mod copy;
pub mod naming;
pub mod predicates;
pub mod shred;

pub use copy::{copy_file, copy_file_force};
pub use naming::clean_filename;
pub use predicates::{
    file_contains, is_dir, is_empty_dir, is_file, is_non_empty_file, try_is_dir, try_is_file,
};
pub use shred::{shred, ShredTarget, Shredder};
