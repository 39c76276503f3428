pub mod reader;
pub mod row;
pub mod stream;
