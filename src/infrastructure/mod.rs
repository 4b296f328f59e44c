//! Infrastructure layer - Port implementations
//!
//! Static wiring of the shared ring state, the strip adapter and the render
//! task.

pub mod drivers;
pub mod services;
pub mod tasks;
pub mod types;
