pub mod dto;
mod github_client;
mod response;

pub use github_client::GithubClient;
