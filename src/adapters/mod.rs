// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod http;
pub mod memory;

pub use console::ConsoleSink;
pub use http::ReqwestTransport;
pub use memory::MemorySink;
