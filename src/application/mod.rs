pub mod memory;
pub mod source_port;

pub use memory::MemorySource;
pub use source_port::EntrySource;
