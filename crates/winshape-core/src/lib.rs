//! winshape-core: Win32 window inspection and style manipulation
//!
//! This library provides the business logic for the winshape CLI: locating
//! native windows, reading and changing their geometry, stripping and
//! restoring their non-client chrome, and the interactive hotkey capture
//! session.
//!
//! # Main Entry Points
//!
//! - [`window`] - Locate windows, read info, resize
//! - [`styles`] - Borderless apply/revert with persisted style snapshots
//! - [`capture`] - Interactive hotkey capture session
//! - [`platform`] - Thin checked wrappers over the Win32 API

pub mod capture;
pub mod errors;
pub mod events;
pub mod logging;
pub mod platform;
pub mod styles;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use platform::RawHandle;
pub use styles::StyleSnapshot;
pub use window::WindowInfo;

// Re-export logging initialization
pub use logging::init_logging;
