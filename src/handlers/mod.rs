mod shortener;

pub use shortener::{redirect_handler, shorten_handler};
