pub mod cache;
pub mod calculator;
pub mod context;
pub mod filter;
pub mod group;
pub mod logic;
pub mod rules;
