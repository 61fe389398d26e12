pub mod activities;
pub mod csv_source;
pub mod observation;
pub mod store;

pub use activities::*;
pub use csv_source::*;
pub use observation::*;
pub use store::*;
