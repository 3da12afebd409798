mod lookup;
mod mac;

pub use lookup::*;
pub use mac::*;
