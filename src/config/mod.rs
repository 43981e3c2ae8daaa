//! Configuration module for shaderpack
//!
//! A pack run is described by a [`PackConfig`], built either from the command
//! line (`<OUTPUT> <INPUT>...`) or from a TOML manifest:
//!
//! ```toml
//! output = "generated/shaders.h"
//! inputs = ["gl/fill.vert", "gl/fill.frag"]
//! ```

mod loader;
mod types;

pub use loader::{load_manifest, load_manifest_with_warnings, parse_manifest, ConfigWarning};
pub use types::{Manifest, PackConfig};
