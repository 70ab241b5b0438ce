pub mod backends;

pub use backends::{JsonFileStore, MemoryStore};

pub mod prelude {
    pub use super::{JsonFileStore, MemoryStore};
    pub use sw_core::storage::ProcessedStore;
}
