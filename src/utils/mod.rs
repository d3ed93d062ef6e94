//! Various utility modules.

pub mod percent;
