use async_trait::async_trait;
use pulse_common::api::PulseApi;
use pulse_common::models::{
    Entry, EntryId, EntryPage, EntryQuery, HelpType, IssueSummary, ProfileEntries, ProfileSummary,
    UserStatus,
};
use pulse_common::{ProfileTab, PulseConfig, PulseError, UserSession};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use tracing::debug;

/// Body of a newsletter signup request
#[derive(Serialize)]
struct SignupBody<'a> {
    email: &'a str,
    newsletters: &'a str,
    source: &'a str,
}

/// Pulse REST API over HTTP.
///
/// Requests carry the browser session cookie; mutating requests also send
/// the CSRF token learned during session verification.
pub struct HttpPulseApi {
    client: reqwest::Client,
    config: PulseConfig,
    session: Rc<UserSession>,
}

impl HttpPulseApi {
    pub fn new(config: PulseConfig, session: Rc<UserSession>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            session,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = with_credentials(request);
        match self.session.csrf_token() {
            Some(token) => request.header("X-CSRFToken", token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, PulseError> {
        let url = self.config.api_url(path);
        debug!(%url, "GET");
        let request = with_credentials(self.client.get(&url).query(query));
        let resp = send(request).await?;
        resp.json()
            .await
            .map_err(|e| PulseError::Parse(format!("{url}: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

async fn send(request: RequestBuilder) -> Result<Response, PulseError> {
    let resp = request
        .send()
        .await
        .map_err(|e| PulseError::Network(e.to_string()))?;
    check_status(resp.status())?;
    Ok(resp)
}

fn check_status(status: reqwest::StatusCode) -> Result<(), PulseError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(PulseError::Network("Not found.".to_string()));
    }
    if !status.is_success() {
        return Err(PulseError::Network(format!("Server error: {status}")));
    }
    Ok(())
}

/// Path listing entries for `query`. Server-side bookmarks have their own endpoint.
pub(crate) fn entries_path(query: &EntryQuery) -> &'static str {
    if query.bookmarked_only {
        "/entries/bookmarks/"
    } else {
        "/entries/"
    }
}

/// Entry-type flags selecting which groups the profile entries endpoint returns
pub(crate) fn profile_entries_query(tab: ProfileTab) -> Vec<(&'static str, String)> {
    tab.entry_types()
        .iter()
        .map(|entry_type| (entry_type.name(), String::new()))
        .collect()
}

#[async_trait(?Send)]
impl PulseApi for HttpPulseApi {
    async fn entry(&self, id: EntryId) -> Result<Entry, PulseError> {
        self.get_json(&format!("/entries/{id}/"), &[]).await
    }

    async fn entries(&self, query: &EntryQuery) -> Result<EntryPage, PulseError> {
        self.get_json(entries_path(query), &query.to_pairs()).await
    }

    async fn put_bookmark(&self, id: EntryId) -> Result<(), PulseError> {
        let url = self.config.api_url(&format!("/entries/{id}/bookmark"));
        debug!(%url, "PUT");
        send(self.authorize(self.client.put(&url))).await?;
        Ok(())
    }

    async fn sign_up(&self, email: &str, origin_url: &str) -> Result<(), PulseError> {
        let body = SignupBody {
            email,
            newsletters: &self.config.newsletter,
            source: origin_url,
        };
        send(self.client.post(&self.config.signup_url).json(&body)).await?;
        Ok(())
    }

    async fn help_types(&self) -> Result<Vec<HelpType>, PulseError> {
        self.get_json("/helptypes/", &[]).await
    }

    async fn issues(&self) -> Result<Vec<IssueSummary>, PulseError> {
        self.get_json("/issues/", &[]).await
    }

    async fn user_status(&self) -> Result<UserStatus, PulseError> {
        self.get_json("/userstatus/", &[]).await
    }

    async fn profile(&self, id: u64) -> Result<ProfileSummary, PulseError> {
        self.get_json(&format!("/profiles/{id}/"), &[]).await
    }

    async fn profile_entries(&self, id: u64, tab: ProfileTab) -> Result<ProfileEntries, PulseError> {
        self.get_json(&format!("/profiles/{id}/entries/"), &profile_entries_query(tab))
            .await
    }

    fn login_url(&self, original_url: &str) -> String {
        self.config.login_url(original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(check_status(reqwest::StatusCode::OK).is_ok());
        assert_eq!(
            check_status(reqwest::StatusCode::NOT_FOUND),
            Err(PulseError::Network("Not found.".to_string()))
        );
        assert!(check_status(reqwest::StatusCode::FORBIDDEN)
            .unwrap_err()
            .is_network());
    }

    #[test]
    fn test_entries_path() {
        let mut query = EntryQuery::featured();
        assert_eq!(entries_path(&query), "/entries/");
        query.bookmarked_only = true;
        assert_eq!(entries_path(&query), "/entries/bookmarks/");
    }

    #[test]
    fn test_profile_entries_query_flags() {
        let names: Vec<&str> = profile_entries_query(ProfileTab::Projects)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["published", "created"]);
        assert_eq!(profile_entries_query(ProfileTab::Favs)[0].0, "favorited");
    }

    #[test]
    fn test_login_url_uses_config() {
        let api = HttpPulseApi::new(PulseConfig::default(), Rc::new(UserSession::new()));
        assert!(api
            .login_url("/favs")
            .ends_with("/login?original_url=%2Ffavs"));
    }
}
