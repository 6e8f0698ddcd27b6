pub mod degree;
pub mod density;
