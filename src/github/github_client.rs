use super::{dto::repo_record::RepoRecord, response::RepositoryResponse};
use crate::http::{Error, Headers, HttpClient, ResponseHandler};

pub struct GithubClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, Error> {
        Ok(GithubClient {
            http: HttpClient::new()?,
            base_url: base_url.into(),
            token,
        })
    }

    /// Fetches `GET /repos/{owner}/{repo}` and projects it to a [`RepoRecord`].
    pub async fn fetch_one(&self, owner: &str, repo: &str) -> Result<RepoRecord, Error> {
        let uri = format!(
            "{}/repos/{}/{}",
            self.base_url.trim_end_matches('/'),
            owner,
            repo
        );

        log::debug!("GET {}", uri);

        let response = self
            .http
            .get(&uri)
            .github_headers(self.token.as_deref())
            .send()
            .await
            .map_err(|cause| Error::Network { cause })?;

        let repository = response.handle::<RepositoryResponse>(repo).await?;

        Ok(repository.into())
    }
}
