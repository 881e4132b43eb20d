//! User preferences value objects.
//!
//! # Responsibility
//! - Hold the GUI geometry and the address-book file path.
//! - Serialize as the standalone preferences JSON document.
//!
//! # Invariants
//! - Preferences are plain values; copying them never aliases the book.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: u32 = 740;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Window geometry remembered between runs.
///
/// Coordinates are absent until the shell reports a first position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    window_width: u32,
    window_height: u32,
    window_coordinates: Option<(i32, i32)>,
}

impl GuiSettings {
    pub fn new(width: u32, height: u32, x: i32, y: i32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            window_coordinates: Some((x, y)),
        }
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    pub fn window_coordinates(&self) -> Option<(i32, i32)> {
        self.window_coordinates
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_coordinates: None,
        }
    }
}

/// The independently persisted preferences document: GUI settings plus the
/// address-book file location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    address_book_file_path: PathBuf,
}

impl UserPrefs {
    pub fn gui_settings(&self) -> GuiSettings {
        self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.address_book_file_path = path;
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from("data/clientbook.json"),
        }
    }
}
