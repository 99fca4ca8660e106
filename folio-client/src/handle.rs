use crate::config::{ApiVersion, ClientConfig, ClientDefaults};
use crate::error::ResolveError;
use crate::image::{ImageReference, UrlBuilder, resolve_image_url};
use tracing::debug;
use url::Url;

/// Live content API host.
pub const API_HOST: &str = "api.sanity.io";

/// Cached content API host, used when `use_cdn` is set.
pub const API_CDN_HOST: &str = "apicdn.sanity.io";

/// Binds `config` to the repository defaults.
///
/// Never fails and performs no I/O. Fields set on `config` take precedence
/// over [`ClientDefaults`].
pub fn create_client(config: ClientConfig) -> ClientHandle {
    create_client_with_defaults(config, &ClientDefaults::default())
}

/// Like [`create_client`] with an explicit set of defaults.
pub fn create_client_with_defaults(config: ClientConfig, defaults: &ClientDefaults) -> ClientHandle {
    let handle = ClientHandle {
        project_id: config.project_id,
        dataset: config.dataset.unwrap_or_else(|| defaults.dataset.clone()),
        api_version: config.api_version.unwrap_or(defaults.api_version),
        use_cdn: config.use_cdn.unwrap_or(defaults.use_cdn),
    };
    debug!(
        project_id = %handle.project_id,
        dataset = %handle.dataset,
        api_version = %handle.api_version,
        use_cdn = handle.use_cdn,
        "Created content client"
    );
    handle
}

/// An immutable, configuration-bound descriptor of a content-store client.
///
/// Handles are plain values: cloning is cheap, and several handles with
/// different datasets (e.g. preview and production) can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHandle {
    project_id: String,
    dataset: String,
    api_version: ApiVersion,
    use_cdn: bool,
}

impl ClientHandle {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    pub fn use_cdn(&self) -> bool {
        self.use_cdn
    }

    /// The fully specified configuration this handle was bound with.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            project_id: self.project_id.clone(),
            dataset: Some(self.dataset.clone()),
            api_version: Some(self.api_version),
            use_cdn: Some(self.use_cdn),
        }
    }

    /// A new handle with `overrides` layered over this one's configuration.
    /// `self` is left untouched.
    #[must_use]
    pub fn with_config(&self, overrides: &ClientConfig) -> ClientHandle {
        create_client(self.config().merged(overrides))
    }

    pub fn api_host(&self) -> &'static str {
        if self.use_cdn { API_CDN_HOST } else { API_HOST }
    }

    /// Base URL of the versioned content API, e.g.
    /// `https://abc123.api.sanity.io/v2024-05-01`.
    pub fn api_base_url(&self) -> String {
        format!(
            "https://{}.{}/{}",
            self.project_id,
            self.api_host(),
            self.api_version.path_segment()
        )
    }

    /// URL for running a GROQ query against this handle's dataset.
    pub fn query_url(&self, query: &str) -> Result<Url, ResolveError> {
        let mut url = self.endpoint(&["data", "query", self.dataset.as_str()])?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }

    /// URL for fetching documents by id from this handle's dataset.
    pub fn document_url(&self, document_id: &str) -> Result<Url, ResolveError> {
        self.endpoint(&["data", "doc", self.dataset.as_str(), document_id])
    }

    /// Image URL builder for `reference` in this handle's project and dataset.
    pub fn image_url(&self, reference: &ImageReference) -> Result<UrlBuilder, ResolveError> {
        resolve_image_url(Some(reference), self)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ResolveError> {
        let mut url = Url::parse(&format!("https://{}.{}/", self.project_id, self.api_host()))?;
        url.path_segments_mut()
            .map_err(|()| ResolveError::InvalidUrl(format!("no path for project '{}'", self.project_id)))?
            .clear()
            .push(&self.api_version.path_segment())
            .extend(segments);
        Ok(url)
    }
}
