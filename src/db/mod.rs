pub mod initialize;
pub mod kv;
pub mod memory;
pub mod migrate;
pub mod pool;

pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use pool::{DbPool, open_or_memory};
