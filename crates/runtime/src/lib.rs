pub mod controller;
pub mod journal;
pub mod view;

pub use controller::*;
pub use journal::*;
pub use view::*;
