pub mod storage;
pub mod time;
pub mod token;
