pub mod photo_store;
pub mod recommendations;

pub use photo_store::{DiskPhotoStore, PhotoError, PhotoStore};
pub use recommendations::{recommend, CAPTURED_TIP};
