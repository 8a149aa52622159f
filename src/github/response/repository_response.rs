use serde::Deserialize;

/// The subset of `GET /repos/{owner}/{repo}` that gets kept.
#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub language: Option<String>,
    pub license: Option<LicenseResponse>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseResponse {
    pub spdx_id: Option<String>,
}
