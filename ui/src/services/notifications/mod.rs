pub mod toast_list;
pub mod toast_queue;

pub use toast_list::*;
pub use toast_queue::*;
