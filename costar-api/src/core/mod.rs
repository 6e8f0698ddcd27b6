pub mod entities;
pub mod storage;
