//! Terminal board front end for the knight move engine.

pub mod command;
pub mod error;
pub mod render;
pub mod selection;
pub mod session;

pub use command::{BoardOption, Command};
pub use error::BoardError;
pub use render::BoardView;
pub use selection::{ClickOutcome, Selection};
pub use session::{Session, SessionConfig};
