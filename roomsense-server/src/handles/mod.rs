mod dashboard_handle;
mod sensor_handle;
mod sse_handle;

pub use dashboard_handle::*;
pub use sensor_handle::*;
pub use sse_handle::*;
