//! Document store implementations.

mod drive;

pub use drive::{is_pdf, DriveSource};
