pub mod record;
pub mod reporter;
pub mod sink;
pub mod text;

pub mod memory_sink;

#[cfg(feature = "tracing")]
pub mod layer;

#[cfg(feature = "tracing")]
pub mod init;
