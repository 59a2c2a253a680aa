//! Drop Gate — accepts a dropped file and hands its location to the action handler.
//!
//! The gate tracks whether a drag is hovering over the drop zone and, on drop,
//! resolves the first offered item on the tokio runtime. The resolved location is
//! delivered through a [`DropSink`], which is expected to hop back onto the UI
//! thread before anything touches shared state. Failures are logged and dropped.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::types::errors::DropError;
use crate::types::location::SourceLocation;

/// Type identifier for a file-URL payload, the only kind the gate accepts.
pub const FILE_URL_TYPE: &str = "public.file-url";

/// Pending load of an item's raw data representation.
pub type ItemFuture = Pin<Box<dyn Future<Output = Result<Vec<u8>, DropError>> + Send + 'static>>;

/// One item offered by a drop gesture.
pub trait ItemProvider: Send {
    fn has_item_conforming_to(&self, type_id: &str) -> bool;
    fn load_item(&self, type_id: &str) -> ItemFuture;
}

/// Receives locations resolved off the UI thread.
pub trait DropSink: Send + Sync + 'static {
    fn deliver(&self, location: SourceLocation);
}

impl DropSink for UnboundedSender<SourceLocation> {
    fn deliver(&self, location: SourceLocation) {
        // Receiver gone means the window closed; nothing left to notify.
        let _ = self.send(location);
    }
}

/// What the gate tells the gesture system about a drop.
#[derive(Debug)]
pub struct DropResponse {
    /// Always true: the visual drag feedback is never rejected.
    pub accepted: bool,
    /// The spawned resolution, if an item was worth resolving.
    pub resolution: Option<JoinHandle<()>>,
}

pub struct DropGate {
    targeted: bool,
    runtime: Handle,
    sink: Arc<dyn DropSink>,
}

impl DropGate {
    pub fn new(runtime: Handle, sink: Arc<dyn DropSink>) -> Self {
        Self {
            targeted: false,
            runtime,
            sink,
        }
    }

    /// The hover flag the drop zone styling reads.
    pub fn is_targeted(&self) -> bool {
        self.targeted
    }

    /// Returns true if the hover flag changed.
    pub fn drag_entered(&mut self) -> bool {
        !std::mem::replace(&mut self.targeted, true)
    }

    /// Returns true if the hover flag changed.
    pub fn drag_exited(&mut self) -> bool {
        std::mem::replace(&mut self.targeted, false)
    }

    /// Handles a drop gesture. Only the first provider is considered.
    pub fn perform_drop(&mut self, providers: Vec<Box<dyn ItemProvider>>) -> DropResponse {
        self.targeted = false;

        let drop_id = Uuid::new_v4();
        if providers.len() > 1 {
            tracing::debug!(%drop_id, ignored = providers.len() - 1, "only the first dropped item is used");
        }
        let provider = match first_file_item(providers) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::debug!(%drop_id, error = %e, "drop ignored");
                return DropResponse {
                    accepted: true,
                    resolution: None,
                };
            }
        };

        let sink = Arc::clone(&self.sink);
        let load = provider.load_item(FILE_URL_TYPE);
        let span = tracing::debug_span!("drop", %drop_id);
        let task = self.runtime.spawn(
            async move {
                match resolve_location(load).await {
                    Ok(location) => {
                        tracing::info!(%location, "dropped video resolved");
                        sink.deliver(location);
                    }
                    Err(e) => tracing::debug!(error = %e, "dropped item ignored"),
                }
            }
            .instrument(span),
        );

        DropResponse {
            accepted: true,
            resolution: Some(task),
        }
    }
}

/// Picks the first offered item, provided it can supply a file URL.
///
/// Later items are never consulted, even when the first one does not conform.
pub fn first_file_item(
    providers: Vec<Box<dyn ItemProvider>>,
) -> Result<Box<dyn ItemProvider>, DropError> {
    let provider = providers.into_iter().next().ok_or(DropError::NoProvider)?;
    if !provider.has_item_conforming_to(FILE_URL_TYPE) {
        return Err(DropError::UnsupportedType(FILE_URL_TYPE.to_string()));
    }
    Ok(provider)
}

/// Awaits an item load and decodes it into a location.
pub async fn resolve_location(load: ItemFuture) -> Result<SourceLocation, DropError> {
    let data = load.await?;
    SourceLocation::from_data_representation(&data)
}

/// Item provider backed by a path the windowing system reported as dropped.
#[derive(Debug, Clone)]
pub struct PathItemProvider {
    path: PathBuf,
}

impl PathItemProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wraps every dropped path, preserving order.
    pub fn boxed_all(paths: Vec<PathBuf>) -> Vec<Box<dyn ItemProvider>> {
        paths
            .into_iter()
            .map(|p| Box::new(PathItemProvider::new(p)) as Box<dyn ItemProvider>)
            .collect()
    }
}

impl ItemProvider for PathItemProvider {
    fn has_item_conforming_to(&self, type_id: &str) -> bool {
        type_id == FILE_URL_TYPE
    }

    fn load_item(&self, type_id: &str) -> ItemFuture {
        let path = self.path.clone();
        let type_id = type_id.to_string();
        Box::pin(async move {
            if type_id != FILE_URL_TYPE {
                return Err(DropError::UnsupportedType(type_id));
            }
            tokio::fs::metadata(&path)
                .await
                .map_err(|e| DropError::LoadFailed(format!("{}: {}", path.display(), e)))?;
            Ok(SourceLocation::from_path(&path)?.into_bytes())
        })
    }
}
