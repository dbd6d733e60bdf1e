pub mod thought;
pub mod view;

pub use thought::*;
pub use view::*;
