mod discrete;
pub use discrete::*;

mod interval;
pub use interval::*;

mod control_value;
pub use control_value::*;

mod target;
pub use target::*;

mod notification;
pub use notification::*;

mod signal;
pub use signal::*;

mod takeover;
pub use takeover::*;

mod bound_value;
pub use bound_value::*;

mod select_value;
pub use select_value::*;

mod registry;
pub use registry::*;

mod window;
pub use window::*;

#[cfg(test)]
mod test_util;
