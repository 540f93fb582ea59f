pub mod check;
pub mod decrypt;
pub mod encrypt;

pub use check::*;
pub use decrypt::*;
pub use encrypt::*;
