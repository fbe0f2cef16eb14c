//! Headless board simulator.
//!
//! # Architecture
//!
//! ```text
//! board-sim (composition root)
//!   ├─→ board-content (track, items, config from the data directory)
//!   ├─→ board-core    (walker and turn rules)
//!   └─→ presentation  (tracing-backed Presentation and GameFlow)
//! ```

pub mod config;
pub mod presentation;
pub mod session;

pub use config::SimConfig;
pub use presentation::{LogFlow, LogPresentation};
pub use session::{Session, TurnReport, WalkMode};
