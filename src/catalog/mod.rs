//! The pizza menu: static variant definitions, size resolution, and text rendering.

pub mod formatter;
pub mod instance;
pub mod registry;
pub mod variant;

pub use formatter::*;
pub use instance::*;
pub use registry::*;
pub use variant::*;
