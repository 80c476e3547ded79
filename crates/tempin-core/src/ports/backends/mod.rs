//! Production implementations of the pipeline ports.

pub mod appx;
pub mod encoder;
pub mod fs;
pub mod resources;

pub use appx::AppxPackageQuery;
pub use encoder::DataUriEncoder;
pub use fs::TokioFileSystem;
pub use resources::StaticResourcePaths;
