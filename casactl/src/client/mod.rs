//! Client-side mirror of the server collection.
//!
//! [`ApiClient`] is a thin HTTP wrapper over the REST endpoints;
//! [`PropertyStore`] layers UI state on top: the listing slice, a
//! single-focus `current_property`, and loading/error flags. Every store
//! action transitions to loading, performs exactly one HTTP call, and either
//! updates the relevant slice or records a localized error message - and then
//! re-raises, so callers can still react to the failure.
//!
//! The offline fallback to bundled sample data is an explicit capability
//! flag rather than a silent catch-and-substitute, so "real empty result"
//! and "fallback engaged" stay distinguishable.

pub mod mock;

use crate::api::models::properties::{PropertyCreate, PropertyListResponse, PropertyResponse, PropertyUpdate};
use crate::types::PropertyId;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;
use url::Url;

const FETCH_LIST_FAILED: &str = "Échec de récupération des propriétés";
const FETCH_ONE_FAILED: &str = "Échec de récupération de la propriété";
const CREATE_FAILED: &str = "Échec de création de la propriété";
const UPDATE_FAILED: &str = "Échec de mise à jour de la propriété";
const DELETE_FAILED: &str = "Échec de suppression de la propriété";

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad JSON)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: StatusCode },
}

/// HTTP client for the property listings API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn items_url(&self) -> String {
        format!("{}items", self.base_url)
    }

    fn item_url(&self, id: PropertyId) -> String {
        format!("{}items/{}", self.base_url, id)
    }

    pub async fn list_properties(&self) -> ClientResult<PropertyListResponse> {
        let response = self.http.get(self.items_url()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus { status: response.status() });
        }
        Ok(response.json().await?)
    }

    /// Fetch one property; a 404 is reported as `None`, not an error.
    pub async fn get_property(&self, id: PropertyId) -> ClientResult<Option<PropertyResponse>> {
        let response = self.http.get(self.item_url(id)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(ClientError::UnexpectedStatus { status }),
        }
    }

    pub async fn create_property(&self, input: &PropertyCreate) -> ClientResult<PropertyResponse> {
        let response = self.http.post(self.items_url()).json(input).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus { status: response.status() });
        }
        Ok(response.json().await?)
    }

    pub async fn update_property(&self, id: PropertyId, input: &PropertyUpdate) -> ClientResult<Option<PropertyResponse>> {
        let response = self.http.put(self.item_url(id)).json(input).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(ClientError::UnexpectedStatus { status }),
        }
    }

    /// Delete a property; `false` means the server did not know the id.
    pub async fn delete_property(&self, id: PropertyId) -> ClientResult<bool> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(ClientError::UnexpectedStatus { status }),
        }
    }
}

/// UI-side store mirroring the server-side collection.
///
/// Actions serialize implicitly through `&mut self`: two overlapping edits
/// from the same client race via plain last-write-wins, nothing more.
pub struct PropertyStore {
    client: ApiClient,
    offline_fallback: bool,
    fallback_engaged: bool,
    pub properties: Vec<PropertyResponse>,
    pub current_property: Option<PropertyResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PropertyStore {
    pub fn new(client: ApiClient, offline_fallback: bool) -> Self {
        Self {
            client,
            offline_fallback,
            fallback_engaged: false,
            properties: Vec::new(),
            current_property: None,
            loading: false,
            error: None,
        }
    }

    /// Whether the listing slice currently holds bundled sample data instead
    /// of server state.
    pub fn fallback_engaged(&self) -> bool {
        self.fallback_engaged
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.loading = false;
    }

    /// Refresh the listing slice from the server.
    pub async fn fetch_properties(&mut self) -> ClientResult<()> {
        self.begin();
        match self.client.list_properties().await {
            Ok(listing) => {
                self.properties = listing.items;
                self.fallback_engaged = false;
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                self.fail(FETCH_LIST_FAILED);
                if self.offline_fallback {
                    warn!("API unavailable, falling back to bundled sample data");
                    self.properties = mock::sample_properties();
                    self.fallback_engaged = true;
                }
                Err(err)
            }
        }
    }

    /// Focus a single property. `Ok(None)` means the server does not know the id.
    pub async fn fetch_property_by_id(&mut self, id: PropertyId) -> ClientResult<Option<PropertyResponse>> {
        self.begin();
        match self.client.get_property(id).await {
            Ok(property) => {
                self.current_property = property.clone();
                self.loading = false;
                Ok(property)
            }
            Err(err) => {
                self.fail(FETCH_ONE_FAILED);
                Err(err)
            }
        }
    }

    /// Create a listing and append it to the local slice.
    pub async fn create_property(&mut self, input: &PropertyCreate) -> ClientResult<PropertyResponse> {
        self.begin();
        match self.client.create_property(input).await {
            Ok(created) => {
                self.properties.push(created.clone());
                self.loading = false;
                Ok(created)
            }
            Err(err) => {
                self.fail(CREATE_FAILED);
                Err(err)
            }
        }
    }

    /// Update a listing, replacing the matching entry in the local slice.
    pub async fn update_property(&mut self, id: PropertyId, input: &PropertyUpdate) -> ClientResult<Option<PropertyResponse>> {
        self.begin();
        match self.client.update_property(id, input).await {
            Ok(Some(updated)) => {
                for property in &mut self.properties {
                    if property.id == id {
                        *property = updated.clone();
                    }
                }
                self.current_property = Some(updated.clone());
                self.loading = false;
                Ok(Some(updated))
            }
            Ok(None) => {
                self.loading = false;
                Ok(None)
            }
            Err(err) => {
                self.fail(UPDATE_FAILED);
                Err(err)
            }
        }
    }

    /// Delete a listing and drop it from the local slice.
    pub async fn delete_property(&mut self, id: PropertyId) -> ClientResult<bool> {
        self.begin();
        match self.client.delete_property(id).await {
            Ok(true) => {
                self.properties.retain(|property| property.id != id);
                self.current_property = None;
                self.loading = false;
                Ok(true)
            }
            Ok(false) => {
                self.loading = false;
                Ok(false)
            }
            Err(err) => {
                self.fail(DELETE_FAILED);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_config;
    use crate::{build_router, AppState};
    use crate::service::PropertyService;
    use crate::store::Properties;

    /// Spin up the real server on an ephemeral loopback port and return a
    /// client pointed at it.
    async fn spawn_server() -> ApiClient {
        let state = AppState::builder()
            .service(PropertyService::new(Properties::new()))
            .config(create_test_config())
            .build();
        let router = build_router(&state).expect("build router");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service()).await.expect("serve");
        });

        let base_url = Url::parse(&format!("http://{addr}/")).expect("base url");
        ApiClient::new(base_url)
    }

    fn unreachable_client() -> ApiClient {
        // Port 1 on loopback is never listening; connections fail fast.
        ApiClient::new(Url::parse("http://127.0.0.1:1/").expect("url"))
    }

    fn loft() -> PropertyCreate {
        PropertyCreate {
            title: "Loft".to_string(),
            city: "Lyon".to_string(),
            price: 100_000.0,
            currency: None,
            image: None,
            description: None,
            bedrooms: None,
            bathrooms: None,
            surface: None,
            kind: None,
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_store_mirrors_server_through_crud_cycle() {
        let client = spawn_server().await;
        let mut store = PropertyStore::new(client, false);

        store.fetch_properties().await.expect("fetch");
        assert!(store.properties.is_empty());
        assert!(!store.fallback_engaged());

        let created = store.create_property(&loft()).await.expect("create");
        assert_eq!(store.properties.len(), 1);

        let update = PropertyUpdate {
            price: Some(150_000.0),
            ..Default::default()
        };
        let updated = store.update_property(created.id, &update).await.expect("update").expect("known id");
        assert_eq!(updated.price, 150_000.0);
        assert_eq!(store.properties[0].price, 150_000.0);
        assert_eq!(store.current_property.as_ref().map(|p| p.id), Some(created.id));

        assert!(store.delete_property(created.id).await.expect("delete"));
        assert!(store.properties.is_empty());
        assert!(store.current_property.is_none());
        assert!(!store.loading);
        assert!(store.error.is_none());
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_unknown_id_clears_focus_without_error() {
        let client = spawn_server().await;
        let mut store = PropertyStore::new(client, false);

        let focus = store.fetch_property_by_id(uuid::Uuid::new_v4()).await.expect("fetch");
        assert!(focus.is_none());
        assert!(store.current_property.is_none());
        assert!(store.error.is_none());
    }

    #[test_log::test(tokio::test)]
    async fn test_offline_fallback_engages_when_enabled() {
        let mut store = PropertyStore::new(unreachable_client(), true);

        let result = store.fetch_properties().await;
        assert!(result.is_err(), "the failure must still be re-raised");

        assert_eq!(store.error.as_deref(), Some(FETCH_LIST_FAILED));
        assert!(store.fallback_engaged());
        assert_eq!(store.properties.len(), 6);
        assert!(!store.loading);
    }

    #[test_log::test(tokio::test)]
    async fn test_no_fallback_without_the_capability_flag() {
        let mut store = PropertyStore::new(unreachable_client(), false);

        assert!(store.fetch_properties().await.is_err());
        assert_eq!(store.error.as_deref(), Some(FETCH_LIST_FAILED));
        assert!(!store.fallback_engaged());
        assert!(store.properties.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_successful_fetch_disengages_fallback() {
        let mut store = PropertyStore::new(unreachable_client(), true);
        let _ = store.fetch_properties().await;
        assert!(store.fallback_engaged());

        store.client = spawn_server().await;
        store.fetch_properties().await.expect("fetch against live server");

        assert!(!store.fallback_engaged());
        assert!(store.properties.is_empty());
        assert!(store.error.is_none());
    }
}
