mod component;
mod state;
mod summary;
mod types;

pub use component::Connections;
pub use summary::{summarize, summarize_with};
pub use types::{Connection, ConnectionTarget, Group, GroupKey, Intermediary, direct_connections};
