pub mod convert;
pub mod hook;
pub mod laws;
pub mod optional;
