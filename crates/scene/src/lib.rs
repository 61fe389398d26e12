pub mod breadcrumb;
pub mod navigation;
pub mod selection;
pub mod stage;

pub use breadcrumb::*;
pub use navigation::*;
pub use selection::*;
pub use stage::*;
