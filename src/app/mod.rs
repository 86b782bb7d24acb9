pub mod dispatch;
mod image;
mod render;
mod status;

pub use dispatch::{dispatch, run};
pub use status::render_status;
