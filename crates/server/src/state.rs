//! Application state for the web server.

use controller::InteractionController;
use report_store::MemoryReportStore;
use std::sync::Arc;
use web_types::MapView;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Controller over the process-wide report table.
    pub controller: Arc<InteractionController<MemoryReportStore>>,
    /// Initial map configuration handed to the page.
    pub map_view: Arc<MapView>,
}

impl AppState {
    /// Create app state over the given store.
    pub fn new(store: MemoryReportStore, map_view: MapView) -> Self {
        Self {
            controller: Arc::new(InteractionController::new(store)),
            map_view: Arc::new(map_view),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MemoryReportStore::new(), MapView::kenya())
    }
}
