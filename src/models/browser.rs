//! Navigation and viewer state types.
//!
//! Two independent state machines drive the UI:
//!
//! - [`View`] - which grid is on screen (folder list, or one open folder)
//! - [`ModalState`] - the document viewer modal overlaid on top of it
//!
//! Transitions are plain methods so they can be exercised without a
//! rendering surface; components call them through the application context.

use super::FileKind;

// =============================================================================
// Navigation
// =============================================================================

/// Which browser view is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// The folder grid (initial state).
    #[default]
    FolderList,
    /// One folder is open, showing its file grid. Carries the folder name,
    /// which is the manifest lookup key.
    FolderOpen(String),
}

impl View {
    /// Open a folder. Opening while another folder is already open simply
    /// replaces it; there is no navigation stack.
    pub fn open_folder(&mut self, name: &str) {
        *self = Self::FolderOpen(name.to_string());
    }

    /// Return to the folder grid and clear the open-folder reference.
    pub fn back(&mut self) {
        *self = Self::FolderList;
    }

    /// Name of the open folder, if any.
    pub fn open_folder_name(&self) -> Option<&str> {
        match self {
            Self::FolderList => None,
            Self::FolderOpen(name) => Some(name),
        }
    }
}

// =============================================================================
// Viewer Modal
// =============================================================================

/// Which viewer surface the modal shows for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKind {
    /// Embedded inline PDF viewer.
    Pdf,
    /// Inline image display.
    Image,
    /// "Unsupported, please download" affordance.
    Unsupported,
}

impl ViewerKind {
    /// Select the viewer for a declared file type. Exactly one viewer is
    /// chosen; everything that is not a PDF or picture goes to the download
    /// affordance.
    pub fn for_kind(kind: FileKind) -> Self {
        match kind {
            FileKind::Pdf => Self::Pdf,
            FileKind::Image => Self::Image,
            _ => Self::Unsupported,
        }
    }
}

/// Viewer modal state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    /// Modal hidden, no viewer content loaded.
    #[default]
    Closed,
    /// Modal visible with one active viewer.
    Open {
        /// Modal title and download file name.
        title: String,
        /// The active viewer surface.
        kind: ViewerKind,
        /// Normalized, percent-encoded resource URL for the viewer and the
        /// download link.
        url: String,
    },
}

impl ModalState {
    /// Close the modal, dropping any loaded viewer content. Every close
    /// trigger (button, scrim, Escape) funnels through this one transition.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_back_round_trip() {
        let initial = View::default();
        let mut view = initial.clone();

        view.open_folder("Annual reports");
        assert_eq!(view.open_folder_name(), Some("Annual reports"));

        view.back();
        assert_eq!(view, initial);
        assert_eq!(view.open_folder_name(), None);
    }

    #[test]
    fn test_open_replaces_open_folder() {
        let mut view = View::default();
        view.open_folder("Annual reports");
        view.open_folder("Staff records");
        assert_eq!(view, View::FolderOpen("Staff records".to_string()));
    }

    #[test]
    fn test_viewer_kind_selection() {
        assert_eq!(ViewerKind::for_kind(FileKind::Pdf), ViewerKind::Pdf);
        assert_eq!(ViewerKind::for_kind(FileKind::Image), ViewerKind::Image);
        for kind in [
            FileKind::Document,
            FileKind::Text,
            FileKind::Archive,
            FileKind::Other,
        ] {
            assert_eq!(ViewerKind::for_kind(kind), ViewerKind::Unsupported);
        }
    }

    #[test]
    fn test_modal_close_resets_state() {
        let mut modal = ModalState::Open {
            title: "plan.pdf".to_string(),
            kind: ViewerKind::Pdf,
            url: "reports/plan.pdf".to_string(),
        };
        assert!(modal.is_open());

        modal.close();
        assert_eq!(modal, ModalState::Closed);
        // Closing an already-closed modal stays closed.
        modal.close();
        assert_eq!(modal, ModalState::Closed);
    }
}
