//! Configuration section definitions.
//!
//! Each submodule corresponds to a top-level section in `reel.toml`.

mod assets;
mod feeds;
mod fixtures;
mod media;
mod serve;

pub use assets::AssetsConfig;
pub use feeds::FeedsConfig;
pub use fixtures::FixturesConfig;
pub use media::MediaConfig;
pub use serve::ServeConfig;
