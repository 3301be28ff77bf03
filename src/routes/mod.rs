mod greeting;

pub use greeting::*;
