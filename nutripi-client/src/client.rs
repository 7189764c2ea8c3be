use async_trait::async_trait;
use log::debug;
use nutripi_model::profile::{ProfilePatch, UserProfile};
use reqwest::{RequestBuilder, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Remote persistence of the signed-in user's profile.
#[mockall::automock]
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;
    /// Returns the profile as stored after the patch was applied.
    async fn patch_profile(&self, patch: &ProfilePatch) -> Result<UserProfile>;
}

pub struct AccountStoreImpl {
    url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl AccountStoreImpl {
    fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            url: format!("{}/profile", base_url.trim_end_matches('/')),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<UserProfile> {
        self.authorize(request)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}

pub fn create(base_url: String, token: Option<String>) -> impl AccountStore {
    AccountStoreImpl::new(base_url, token)
}

fn check_status(resp: Response) -> Result<Response> {
    if resp.status().is_client_error() {
        Err(Error::RequestError)
    } else if resp.status().is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(resp)
    }
}

#[async_trait]
impl AccountStore for AccountStoreImpl {
    async fn get_profile(&self) -> Result<UserProfile> {
        debug!("GET {}", self.url);
        self.send(self.client.get(&self.url)).await
    }

    async fn patch_profile(&self, patch: &ProfilePatch) -> Result<UserProfile> {
        debug!("PATCH {}", self.url);
        self.send(self.client.patch(&self.url).json(patch)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_url_ignores_trailing_slash() {
        let store = AccountStoreImpl::new("http://localhost:8080/api/".to_owned(), None);
        assert_eq!(store.url, "http://localhost:8080/api/profile");

        let store = AccountStoreImpl::new("http://localhost:8080/api".to_owned(), None);
        assert_eq!(store.url, "http://localhost:8080/api/profile");
    }
}
