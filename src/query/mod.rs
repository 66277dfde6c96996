mod client;
mod types;

pub use client::QueryClient;
pub use types::{Guest, Parliamentarian, PersonKind, PersonSummary, profile_url};
