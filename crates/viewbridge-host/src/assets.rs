//! Serving a built frontend directory under a custom protocol

use crate::ViewSource;
use std::path::{Component, Path, PathBuf};
use viewbridge_core::{BridgeError, BridgeResult};

const DEFAULT_PROTOCOL: &str = "assets";
const INDEX_FILE: &str = "index.html";

/// A resolved frontend asset ready to be returned from a protocol handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub mime_type: String,
    pub body: Vec<u8>,
}

impl Asset {
    /// Response headers a protocol handler should attach
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            ("content-type", self.mime_type.as_str()),
            ("Access-Control-Allow-Origin", "*"),
        ]
    }
}

/// A static frontend output directory (the build output of a web framework).
///
/// The entry page is assumed to be `index.html` at the root.
#[derive(Debug, Clone)]
pub struct FrontendAssets {
    root: PathBuf,
    protocol_name: String,
}

impl FrontendAssets {
    /// Serve `root` under `protocol_name`, or `assets` if not given
    pub fn new(root: impl Into<PathBuf>, protocol_name: Option<String>) -> Self {
        Self {
            root: root.into(),
            protocol_name: protocol_name.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    /// The URL the view should load to reach the entry page
    pub fn base_url(&self) -> String {
        // WebView2 only routes custom protocols through http://<name>.localhost
        if cfg!(target_os = "windows") {
            format!("http://{}.localhost", self.protocol_name)
        } else {
            format!("{}://localhost", self.protocol_name)
        }
    }

    /// A view source pointing at the entry page
    pub fn view_source(&self) -> ViewSource {
        ViewSource::Url(self.base_url())
    }

    /// Map a request path to a file under the root
    pub fn resolve(&self, request_path: &str) -> BridgeResult<PathBuf> {
        let path = request_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');

        if path.is_empty() {
            return Ok(self.root.join(INDEX_FILE));
        }

        let relative = Path::new(path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(BridgeError::AssetNotFound(request_path.to_string()));
        }

        Ok(self.root.join(relative))
    }

    /// Load the asset for a request path
    pub fn load(&self, request_path: &str) -> BridgeResult<Asset> {
        let full_path = self.resolve(request_path)?;
        let body = std::fs::read(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory => {
                BridgeError::AssetNotFound(request_path.to_string())
            }
            _ => BridgeError::Io(format!("{}: {e}", full_path.display())),
        })?;
        let mime_type = mime_guess::from_path(&full_path)
            .first_or_text_plain()
            .to_string();

        tracing::trace!(path = %full_path.display(), %mime_type, "serving frontend asset");
        Ok(Asset { mime_type, body })
    }
}
