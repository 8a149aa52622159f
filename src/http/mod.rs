use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use std::{ops::Deref, time::Duration};
use thiserror::Error;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_NAME: &str = "openframebox-site-builder";

// reqwest has no timeout by default
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|cause| Error::Network { cause })?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_NAME);

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

pub trait ResponseHandler {
    /// Fails on any non-2xx status, otherwise parses the body as `T`.
    /// `resource` names what was requested in the error message.
    async fn handle<T>(self, resource: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl ResponseHandler for Response {
    async fn handle<T>(self, resource: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = self.status();

        if !status.is_success() {
            return Err(Error::Fetch {
                resource: resource.to_owned(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let text = self
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponse { cause })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch {resource}: {status} {status_text}")]
    Fetch {
        resource: String,
        status: u16,
        status_text: String,
    },
    #[error("Request failed")]
    Network {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::Value;

    #[tokio::test]
    async fn should_send_github_headers_without_token() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("user-agent", "openframebox-site-builder")
            .match_header("authorization", Matcher::Missing)
            .with_body("{}")
            .create_async()
            .await;

        let client = HttpClient::new()?;
        let response = client.get(url).github_headers(None).send().await?;

        mock.assert_async().await;
        assert!(response.status().is_success());

        Ok(())
    }

    #[tokio::test]
    async fn should_send_bearer_token_when_present() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("user-agent", "openframebox-site-builder")
            .with_body("{}")
            .create_async()
            .await;

        let client = HttpClient::new()?;
        client
            .get(url)
            .github_headers(Some("test_token"))
            .send()
            .await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_parse_successful_body() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/")
            .with_body(r#"{"name": "goqueue"}"#)
            .create_async()
            .await;

        let client = HttpClient::new()?;
        let value: Value = client.get(url).send().await?.handle("goqueue").await?;

        assert_eq!(value["name"], "goqueue");

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_with_status_on_non_success() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client = HttpClient::new()?;
        let err = client
            .get(url)
            .send()
            .await?
            .handle::<Value>("goauth")
            .await
            .unwrap_err();

        match &err {
            Error::Fetch {
                resource,
                status,
                status_text,
            } => {
                assert_eq!(resource, "goauth");
                assert_eq!(*status, 404);
                assert_eq!(status_text, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Failed to fetch goauth: 404 Not Found");

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_body() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/")
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new()?;
        let err = client
            .get(url)
            .send()
            .await?
            .handle::<Value>("goinit")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ParseResponse { .. }));

        Ok(())
    }
}
