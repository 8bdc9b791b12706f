//! App-layer composition root and the root controller.
//!
//! [`App`] owns the opened tree, the recent projects list, and the active
//! mode. Runtime mode handlers are the only callers that mutate it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::entry::{Entry, sort_by_entry};
use crate::domain::permission::{PermissionMode, PermissionState};
use crate::infra::db::KeyValueStore;
use crate::infra::fs::{FileSystemHost, FsError};
use crate::ui::state::app_mode::{AppMode, DirectoryPickerState};

pub mod recents;
pub mod tree;

use recents::RecentsStore;
use tree::{FetchRequest, TreeView};

/// Access level confirmed before a stored project is reused.
pub const RECENT_PERMISSION_MODE: PermissionMode = PermissionMode::ReadWrite;

/// Returns the arbor home directory (`~/.arbor`).
pub fn arbor_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".arbor");
    }

    PathBuf::from(".arbor")
}

/// Internal app events emitted by background listing tasks.
///
/// Producers only emit events; state mutation is centralized in
/// [`App::apply_app_event`].
#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Indicates a directory listing finished for one expanded node.
    DirectoryListed {
        fetch_id: u64,
        node_path: Vec<String>,
        result: Result<Vec<Entry>, FsError>,
    },
}

/// Stores application state and coordinates project opening workflows.
pub struct App {
    pub mode: AppMode,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    fs: Arc<dyn FileSystemHost>,
    launch_dir: PathBuf,
    recents: RecentsStore,
    status_message: Option<String>,
    tree: Option<TreeView>,
}

impl App {
    /// Builds the app state and loads the persisted recent projects.
    ///
    /// `launch_dir` is where the directory picker starts while no project is
    /// open.
    pub async fn new(
        fs: Arc<dyn FileSystemHost>,
        store: Arc<dyn KeyValueStore>,
        launch_dir: PathBuf,
    ) -> Self {
        let recents = RecentsStore::load(store).await;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            mode: AppMode::Start { selected_index: 0 },
            event_rx,
            event_tx,
            fs,
            launch_dir,
            recents,
            status_message: None,
            tree: None,
        }
    }

    /// Returns the tree of the open project, if any.
    pub fn tree(&self) -> Option<&TreeView> {
        self.tree.as_ref()
    }

    /// Returns the entry of the open project, if any.
    pub fn root(&self) -> Option<&Entry> {
        self.tree.as_ref().map(TreeView::root_entry)
    }

    /// Returns recent projects, most recent first.
    pub fn recent_entries(&self) -> &[Entry] {
        self.recents.entries()
    }

    /// Returns the latest user-facing status message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Returns the mode shown when an overlay closes without a result.
    pub fn base_mode(&self) -> AppMode {
        if self.tree.is_some() {
            AppMode::Tree
        } else {
            AppMode::Start { selected_index: 0 }
        }
    }

    /// Opens the directory picker, starting next to the open project or in
    /// the launch directory.
    pub async fn open_new(&mut self) {
        let start_dir = self
            .root()
            .and_then(|entry| entry.path.parent())
            .map_or_else(|| self.launch_dir.clone(), Path::to_path_buf);
        let picker = self.load_picker(start_dir).await;

        self.mode = AppMode::DirectoryPicker(picker);
    }

    /// Lists child directories of `dir` for the directory picker.
    pub async fn load_picker(&self, dir: PathBuf) -> DirectoryPickerState {
        let (directories, error) = match self
            .fs
            .list_directory(Entry::directory(dir.clone()))
            .await
        {
            Ok(entries) => {
                let mut directories: Vec<Entry> =
                    entries.into_iter().filter(Entry::is_dir).collect();
                sort_by_entry(&mut directories, |entry| entry);

                (directories, None)
            }
            Err(error) => (Vec::new(), Some(error.to_string())),
        };

        DirectoryPickerState {
            current_dir: dir,
            directories,
            error,
            selected_index: 0,
        }
    }

    /// Closes the directory picker without opening anything.
    pub fn cancel_open(&mut self) {
        self.mode = self.base_mode();
    }

    /// Opens `entry` chosen in the directory picker.
    ///
    /// Picking an entry authorizes it, so no permission round trip happens.
    pub async fn open_picked(&mut self, entry: Entry) {
        self.fs.grant(entry.clone(), RECENT_PERMISSION_MODE);
        self.set_root(entry).await;
    }

    /// Opens the directory at `path` as if it was picked, resolving it to an
    /// absolute path first.
    ///
    /// # Errors
    /// Returns an error if `path` does not exist or is not a directory.
    pub async fn open_path(&mut self, path: &Path) -> Result<(), FsError> {
        let path = tokio::fs::canonicalize(path)
            .await
            .map_err(|error| FsError::from_io(path, error))?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|error| FsError::from_io(&path, error))?;
        if !metadata.is_dir() {
            return Err(FsError::NotADirectory { path });
        }

        self.open_picked(Entry::directory(path)).await;

        Ok(())
    }

    /// Reopens the recent project at `index` after confirming access.
    ///
    /// Granted access opens it immediately. A denied entry is requested again
    /// right away and aborts only when that request is denied too. An
    /// unconfirmed entry switches to [`AppMode::PermissionRequest`]. Aborting
    /// leaves the open project and the recent list untouched.
    pub async fn open_recent(&mut self, index: usize) {
        let Some(entry) = self.recents.entries().get(index).cloned() else {
            return;
        };

        match self
            .fs
            .query_permission(entry.clone(), RECENT_PERMISSION_MODE)
            .await
        {
            PermissionState::Granted => self.set_root(entry).await,
            PermissionState::Denied => self.request_recent(entry).await,
            PermissionState::Prompt => {
                self.mode = AppMode::PermissionRequest {
                    entry,
                    selected_yes: true,
                };
            }
        }
    }

    /// Finishes a pending permission request for `entry`.
    ///
    /// `accepted` is the user's answer; an accepted request is still denied
    /// when the filesystem refuses access.
    pub async fn resolve_permission_request(&mut self, entry: Entry, accepted: bool) {
        if !accepted {
            info!(path = %entry.path.display(), "permission request declined");
            self.abort_recent(&entry);

            return;
        }

        self.request_recent(entry).await;
    }

    /// Toggles the selected directory of the open tree.
    pub fn toggle_selected_node(&mut self) {
        let Some(request) = self.tree.as_mut().and_then(TreeView::toggle_selected) else {
            return;
        };

        self.spawn_listing(request);
    }

    /// Collapses the selected directory or selects its parent.
    pub fn collapse_selected_node(&mut self) {
        if let Some(tree) = self.tree.as_mut() {
            tree.collapse_selected();
        }
    }

    /// Moves the tree selection one row down.
    pub fn select_next_node(&mut self) {
        if let Some(tree) = self.tree.as_mut() {
            tree.select_next();
        }
    }

    /// Moves the tree selection one row up.
    pub fn select_previous_node(&mut self) {
        if let Some(tree) = self.tree.as_mut() {
            tree.select_previous();
        }
    }

    /// Processes currently queued app events without waiting.
    pub(crate) fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Waits for the next internal app event.
    pub(crate) async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Applies one internal app event.
    pub(crate) fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DirectoryListed {
                fetch_id,
                node_path,
                result,
            } => {
                let result = result.map_err(|error| {
                    warn!(%error, "directory listing failed");

                    error.to_string()
                });
                let Some(tree) = self.tree.as_mut() else {
                    return;
                };

                tree.apply_listing(fetch_id, &node_path, result);
            }
        }
    }

    /// Replaces the open project with `entry` and records it as most recent.
    ///
    /// Dropping the previous tree cancels its pending listings. A failed
    /// recents write is reported but keeps the new project open.
    async fn set_root(&mut self, entry: Entry) {
        info!(path = %entry.path.display(), "opening project");

        let mut tree = TreeView::new(entry.clone());
        let root_request = tree.toggle(&[]);
        self.tree = Some(tree);
        self.mode = AppMode::Tree;
        self.status_message = None;
        if let Some(request) = root_request {
            self.spawn_listing(request);
        }

        if let Err(error) = self.recents.record_opened(entry, self.fs.as_ref()).await {
            warn!(%error, "failed to persist recent projects");
            self.status_message = Some(format!("Could not save recent projects: {error}"));
        }
    }

    async fn request_recent(&mut self, entry: Entry) {
        let state = self
            .fs
            .request_permission(entry.clone(), RECENT_PERMISSION_MODE)
            .await;
        if state.is_granted() {
            self.set_root(entry).await;
        } else {
            self.abort_recent(&entry);
        }
    }

    fn abort_recent(&mut self, entry: &Entry) {
        info!(path = %entry.path.display(), "access to recent project was not granted");
        self.mode = self.base_mode();
        self.status_message = Some(format!("Access to `{}` was not granted", entry.name));
    }

    /// Runs one directory listing in the background and reports it unless
    /// its node was discarded first.
    fn spawn_listing(&self, request: FetchRequest) {
        let fs = Arc::clone(&self.fs);
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let FetchRequest {
                cancel,
                entry,
                fetch_id,
                node_path,
            } = request;
            let result = fs.list_directory(entry).await;
            if cancel.load(Ordering::Relaxed) {
                return;
            }

            let _ = event_tx.send(AppEvent::DirectoryListed {
                fetch_id,
                node_path,
                result,
            });
        });
    }
}
