//! Drop zone setup and lifetime.
//!
//! Contains [`StagingState`], the page element bundle [`DropZoneHandles`],
//! and [`init_drop_zone`], which wires an existing page up:
//!
//! - picker `change` and drop events feed the same staging call
//! - every staging change re-syncs the file input, prompt and name display
//! - previews are rendered by Leptos into the preview container

use gloo_events::{EventListener, EventListenerOptions};
use leptos::mount::mount_to;
use leptos::prelude::*;
use any_spawner::Executor;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlElement, HtmlInputElement};

use dropstage_core::{
    DropZoneConfig, FileIdentity, SelectionMode, SetupError, StageReport, StagedFile,
};

use crate::components::PreviewList;
use crate::config::DRAG_OVER_CLASS;
use crate::models::{BrowserFile, StagedFiles};
use crate::utils::{dom, sync_input_files};

// ============================================================================
// StagingState
// ============================================================================

/// Reactive staging state shared by listeners and preview components.
///
/// `Copy` because both fields are signal handles. The staging set uses
/// local storage since browser `File` objects are not `Send`.
#[derive(Clone, Copy)]
pub struct StagingState {
    /// Files pending submission, in display order.
    pub staged: RwSignal<StagedFiles, LocalStorage>,
    /// Whether files are currently dragged over the drop zone.
    pub dragging: RwSignal<bool>,
}

impl StagingState {
    /// Creates empty state in the current reactive owner.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            staged: RwSignal::new_local(StagedFiles::new(mode)),
            dragging: RwSignal::new(false),
        }
    }

    /// Stages a batch of selected or dropped files.
    ///
    /// Always notifies subscribers, even for an all-duplicate batch: the
    /// picker has just overwritten the input's files and they must be
    /// re-synced.
    pub fn stage_files(&self, files: Vec<BrowserFile>) -> StageReport {
        let report = self
            .staged
            .try_update(|set| set.stage_all(files))
            .unwrap_or_default();

        web_sys::console::debug_1(
            &format!(
                "dropstage: staged {} file(s), ignored {} duplicate(s)",
                report.added, report.duplicates
            )
            .into(),
        );
        report
    }

    /// Removes one staged file.
    pub fn remove(&self, id: &FileIdentity) -> Option<StagedFile<BrowserFile>> {
        self.staged.try_update(|set| set.remove(id)).flatten()
    }

    /// Removes every staged file.
    pub fn clear(&self) {
        self.staged.update(|set| set.clear());
    }

    /// Number of staged files (untracked).
    pub fn len(&self) -> usize {
        self.staged.with_untracked(|set| set.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// DropZoneHandles
// ============================================================================

/// Page elements the widget attaches to.
#[derive(Debug, Clone)]
pub struct DropZoneHandles {
    /// Drop target region.
    pub drop_zone: HtmlElement,
    /// File input whose files are submitted with the form.
    pub input: HtmlInputElement,
    /// Button that opens the picker.
    pub select_button: Option<HtmlElement>,
    /// Container the preview list is mounted into.
    pub preview_container: HtmlElement,
    /// "No file chosen" prompt.
    pub prompt: HtmlElement,
    /// File name display, used in single mode.
    pub file_name_display: Option<HtmlElement>,
}

impl DropZoneHandles {
    /// Locate every element by the ids in `config`.
    pub fn from_document(config: &DropZoneConfig) -> Result<Self, SetupError> {
        let document = dom::document().ok_or(SetupError::NoDocument)?;

        Ok(Self {
            drop_zone: dom::required_element(&document, &config.drop_zone_id, "an HTML element")?,
            input: dom::required_element(&document, &config.input_id, "an <input>")?,
            select_button: dom::optional_element(&document, &config.select_button_id),
            preview_container: dom::required_element(
                &document,
                &config.preview_container_id,
                "an HTML element",
            )?,
            prompt: dom::required_element(&document, &config.prompt_id, "an HTML element")?,
            file_name_display: dom::optional_element(&document, &config.file_name_display_id),
        })
    }
}

// ============================================================================
// DropZone
// ============================================================================

/// A live drop zone.
///
/// Dropping it (or calling [`DropZone::teardown`]) removes every listener,
/// unmounts the previews and disposes the reactive state. Call
/// [`DropZone::forget`] to keep it for the lifetime of the page.
pub struct DropZone {
    state: StagingState,
    owner: Owner,
    listeners: Vec<EventListener>,
    mount: Option<Box<dyn std::any::Any>>,
}

impl DropZone {
    /// The zone's staging state.
    pub fn state(&self) -> StagingState {
        self.state
    }

    /// Keep the zone alive until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    /// Detach from the page.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for DropZone {
    fn drop(&mut self) {
        self.mount.take();
        self.listeners.clear();
        self.owner.cleanup();
    }
}

/// Locate the page elements named by `config` and wire them up.
pub fn init_drop_zone_from_document(config: &DropZoneConfig) -> Result<DropZone, SetupError> {
    config.validate()?;
    let handles = DropZoneHandles::from_document(config)?;
    init_drop_zone(handles, config)
}

/// Wire up a drop zone over existing page elements.
pub fn init_drop_zone(
    handles: DropZoneHandles,
    config: &DropZoneConfig,
) -> Result<DropZone, SetupError> {
    config.validate()?;
    // Effects need an executor; fails harmlessly when one is already set
    let _ = Executor::init_wasm_bindgen();

    let owner = Owner::new();
    let (state, listeners) = owner.with(|| {
        let state = StagingState::new(config.mode);
        let listeners = attach_listeners(&handles, state);
        sync_page(&handles, state);
        (state, listeners)
    });

    let input = handles.input.clone();
    let pdf_scale = config.pdf_scale;
    let mount = mount_to(handles.preview_container.clone(), move || {
        view! { <PreviewList state=state input=input pdf_scale=pdf_scale /> }
    });

    Ok(DropZone {
        state,
        owner,
        listeners,
        mount: Some(Box::new(mount)),
    })
}

// ============================================================================
// Wiring
// ============================================================================

fn attach_listeners(handles: &DropZoneHandles, state: StagingState) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(button) = &handles.select_button {
        let input = handles.input.clone();
        listeners.push(EventListener::new(button, "click", move |_| input.click()));
    }

    let input = handles.input.clone();
    // An empty pick still goes through staging so the input is re-synced
    listeners.push(EventListener::new(&handles.input, "change", move |_| {
        let files = input
            .files()
            .map(|list| BrowserFile::from_list(&list))
            .unwrap_or_default();
        state.stage_files(files);
    }));

    // Default drag handling would navigate away to the dropped file
    let active = EventListenerOptions::enable_prevent_default();
    for event in ["dragenter", "dragover", "dragleave", "drop"] {
        listeners.push(EventListener::new_with_options(
            &handles.drop_zone,
            event,
            active,
            move |e| {
                e.prevent_default();
                e.stop_propagation();
                state.dragging.set(matches!(e.type_().as_str(), "dragenter" | "dragover"));
            },
        ));
    }

    listeners.push(EventListener::new_with_options(
        &handles.drop_zone,
        "drop",
        active,
        move |e| {
            let files = e
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
                .and_then(|transfer| transfer.files());
            if let Some(list) = files
                && list.length() > 0
            {
                state.stage_files(BrowserFile::from_list(&list));
            }
        },
    ));

    listeners
}

/// Keep the static page elements consistent with the staging set.
fn sync_page(handles: &DropZoneHandles, state: StagingState) {
    let input = handles.input.clone();
    let prompt = handles.prompt.clone();
    let name_display = handles.file_name_display.clone();

    Effect::new(move |_| {
        let view = state.staged.with(|set| {
            if let Err(e) = sync_input_files(&input, set.files().map(BrowserFile::raw)) {
                web_sys::console::error_2(&"dropstage: failed to sync file input:".into(), &e);
            }
            set.view()
        });

        dom::set_visible(&prompt, view.prompt_visible);

        if let Some(display) = &name_display {
            display.set_text_content(view.file_name.as_deref());
            dom::set_visible(display, view.file_name.is_some());
        }
    });

    let drop_zone = handles.drop_zone.clone();
    Effect::new(move |_| {
        dom::toggle_class(&drop_zone, DRAG_OVER_CLASS, state.dragging.get());
    });
}
