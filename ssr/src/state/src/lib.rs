#[cfg(feature = "ssr")]
pub mod relay;
#[cfg(feature = "ssr")]
pub mod server;
