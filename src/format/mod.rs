mod caps;
mod ws;

pub use self::caps::*;
pub use self::ws::*;
