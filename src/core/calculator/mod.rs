pub mod blocks;
pub mod breaks;
pub mod status;
pub mod window;
