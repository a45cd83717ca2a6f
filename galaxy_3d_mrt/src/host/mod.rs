/// Host module - collaborators owned by the host application
/// (image registry, diagnostic sink)

pub mod host;
pub mod mock_host;

pub use host::*;
