pub mod alphabet;
pub mod keys;
pub mod substitute;

pub use alphabet::*;
pub use keys::*;
pub use substitute::*;
