//! [`BlogApi`] over the browser `fetch` API.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use techblog_app::config::ClientConfig;
use techblog_app::endpoints::{Endpoints, check_lookup, check_status};
use techblog_app::ports::BlogApi;
use techblog_domain::comment::{Comment, NewComment};
use techblog_domain::error::{ApiError, BlogError};
use techblog_domain::id::PostId;
use techblog_domain::post::{NewPost, Post};

/// JSON API client backed by `gloo-net`.
#[derive(Debug, Clone)]
pub struct GlooBlogApi {
    endpoints: Endpoints,
}

impl GlooBlogApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BlogError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()).into())
}

async fn fetch(url: &str) -> Result<Response, BlogError> {
    tracing::debug!(url, "GET");
    Ok(Request::get(url).send().await.map_err(transport)?)
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, BlogError> {
    let response = fetch(url).await?;
    check_status(response.status())?;
    decode(response).await
}

async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, BlogError> {
    tracing::debug!(url, "POST");
    let response = Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    check_status(response.status())?;
    decode(response).await
}

impl BlogApi for GlooBlogApi {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        get(&self.endpoints.posts()).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, BlogError> {
        let response = fetch(&self.endpoints.post(id)).await?;
        check_lookup(response.status(), "Post", id)?;
        decode(response).await
    }

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, BlogError> {
        get(&self.endpoints.comments_for(post_id)).await
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post, BlogError> {
        post(&self.endpoints.posts(), new_post).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, BlogError> {
        post(&self.endpoints.comments(), comment).await
    }
}
