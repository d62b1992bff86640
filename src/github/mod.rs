pub mod client;
pub mod store;

pub use client::{GithubClient, DEFAULT_API_URL};
pub use store::{ContentStore, RemoteFile};
