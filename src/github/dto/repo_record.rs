use crate::github::response::{LicenseResponse, RepositoryResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub language: Option<String>,
    pub license: Option<License>,
}

/// Present whenever upstream has a license object, even if its id is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub spdx_id: Option<String>,
}

impl From<LicenseResponse> for License {
    fn from(value: LicenseResponse) -> Self {
        License {
            spdx_id: value.spdx_id,
        }
    }
}

impl From<RepositoryResponse> for RepoRecord {
    fn from(value: RepositoryResponse) -> Self {
        RepoRecord {
            name: value.name,
            description: value.description,
            html_url: value.html_url,
            stargazers_count: value.stargazers_count,
            language: value.language,
            license: value.license.map(License::from),
        }
    }
}
