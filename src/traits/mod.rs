mod opener;
mod source;

pub use opener::ConnectionOpener;
pub use source::{ConfigSource, EnvSource};
