mod sensor;
mod view;

pub use sensor::*;
pub use view::*;
