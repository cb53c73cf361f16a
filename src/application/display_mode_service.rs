use leptos::*;

use crate::domain::chart::{ChartTheme, DisplayMode};
use crate::domain::logging::LogComponent;
use crate::infrastructure::describe_js_error;
use crate::infrastructure::storage::PersistentSlot;
use crate::{log_info, log_warn};

const DARK_CLASS: &str = "dark";

/// Light/dark preference, persisted as a JSON bool and mirrored onto the
/// `dark` class of the document root.
#[derive(Clone, Copy)]
pub struct DisplayModeService {
    mode: RwSignal<DisplayMode>,
    slot: StoredValue<PersistentSlot<bool>>,
}

impl DisplayModeService {
    pub fn load(slot: PersistentSlot<bool>) -> Self {
        let mode = DisplayMode::from_dark_flag(slot.load_or(false));
        apply_root_class(mode);
        Self { mode: create_rw_signal(mode), slot: store_value(slot) }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode.with(DisplayMode::is_dark)
    }

    pub fn theme(&self) -> ChartTheme {
        ChartTheme::for_mode(self.mode())
    }

    pub fn toggle(&self) {
        let next = DisplayMode::from_dark_flag(!self.mode.get_untracked().is_dark());
        self.set(next);
    }

    pub fn set(&self, mode: DisplayMode) {
        self.mode.set(mode);
        if let Err(err) = self.slot.with_value(|slot| slot.save(&mode.is_dark())) {
            log_warn!(LogComponent::Application("DisplayMode"), "could not persist display mode: {}", err);
        }
        apply_root_class(mode);
        log_info!(LogComponent::Application("DisplayMode"), "🌓 {} mode", mode);
    }
}

fn apply_root_class(mode: DisplayMode) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark()) {
        log_warn!(
            LogComponent::Application("DisplayMode"),
            "could not update root class: {}",
            describe_js_error(&err)
        );
    }
}
