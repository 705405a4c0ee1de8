mod brush;
mod config;
mod constraint;
mod geometry;
mod history;
mod session;
mod tool;

pub use brush::*;
pub use config::*;
pub use constraint::*;
pub use geometry::*;
pub use history::*;
pub use session::*;
pub use tool::*;
