pub mod snapshot;

pub use snapshot::{RotaQuery, RotaSnapshot, SnapshotSource};
