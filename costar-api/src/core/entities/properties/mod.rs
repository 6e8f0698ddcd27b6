mod prop;

pub use prop::*;
