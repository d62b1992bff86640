use crate::error::{Error, Result};
use crate::github::{ContentStore, RemoteFile};
use crate::model::Repository;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const MEDIA_TYPE: &str = "application/vnd.github+json";
const BODY_EXCERPT: usize = 512;

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Deserialize)]
struct ContentResponse {
    content: String,
    sha: String,
}

#[derive(Serialize)]
struct WriteRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Deserialize)]
struct WriteResponse {
    content: WrittenContent,
}

#[derive(Deserialize)]
struct WrittenContent {
    sha: String,
}

// Create
impl GithubClient {
    pub fn new(api_url: impl ToString, token: impl ToString) -> Result<Self> {
        Self::with_http(reqwest::Client::builder(), api_url, token)
    }

    pub fn with_http(
        http: reqwest::ClientBuilder,
        api_url: impl ToString,
        token: impl ToString,
    ) -> Result<Self> {
        let http = http.user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.to_string().trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

// Requests
impl GithubClient {
    fn contents_url(&self, repo: &Repository, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            repo.owner,
            repo.name,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, MEDIA_TYPE)
    }
}

impl ContentStore for GithubClient {
    async fn resolve_identity(&self) -> Result<String> {
        let url = format!("{}/user", self.api_url);
        let response = self.request(Method::GET, &url).send().await?;
        if !response.status().is_success() {
            return Err(api_error("GET", &url, response).await);
        }
        let user: UserResponse = response.json().await?;
        debug!(login = %user.login, "resolved identity");
        Ok(user.login)
    }

    async fn read_file(&self, repo: &Repository, path: &str) -> Result<Option<RemoteFile>> {
        let url = self.contents_url(repo, path);
        let response = self.request(Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%repo, path, "remote file does not exist");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(api_error("GET", &url, response).await);
        }
        let file: ContentResponse = response.json().await?;
        let content = decode_content(path, &file.content)?;
        debug!(%repo, path, revision = %file.sha, "read remote file");
        Ok(Some(RemoteFile {
            content,
            revision: file.sha,
        }))
    }

    async fn write_file(
        &self,
        repo: &Repository,
        path: &str,
        message: &str,
        content: &str,
        expected_revision: Option<&str>,
    ) -> Result<String> {
        let url = self.contents_url(repo, path);
        let body = WriteRequest {
            message,
            content: STANDARD.encode(content),
            sha: expected_revision,
        };
        let response = self.request(Method::PUT, &url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error = api_error("PUT", &url, response).await;
            return Err(classify_write_failure(path, error));
        }
        let written: WriteResponse = response.json().await?;
        debug!(%repo, path, revision = %written.content.sha, "wrote remote file");
        Ok(written.content.sha)
    }
}

async fn api_error(method: &'static str, url: &str, response: Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::Api {
        method,
        url: url.to_string(),
        status,
        body: body.chars().take(BODY_EXCERPT).collect(),
    }
}

// 409, or 422 complaining about the sha: the file moved on since it was read.
fn classify_write_failure(path: &str, error: Error) -> Error {
    let stale = match &error {
        Error::Api { status: 409, .. } => true,
        Error::Api {
            status: 422, body, ..
        } => body.contains("sha"),
        _ => false,
    };
    if stale {
        Error::StaleRevision {
            path: path.to_string(),
        }
    } else {
        error
    }
}

// Payloads are base64 wrapped at 60 columns.
fn decode_content(path: &str, encoded: &str) -> Result<String> {
    let compact = encoded
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    let bytes = STANDARD.decode(compact)?;
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8(path.to_string()))
}
