//! Testing utilities and harness for Spincard

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
