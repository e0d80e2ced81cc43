//! A single staged file's preview tile.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use dropstage_core::format::format_kilobytes;
use dropstage_core::{FileIdentity, FileLike, MediaKind};

use super::content::{FilePreview, ImagePreview, PdfPreview};
use crate::app::StagingState;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Preview tile: type-specific body, name/size overlay and remove control.
///
/// The tile is keyed by `id`; it lives exactly as long as the file stays
/// staged.
#[component]
pub fn PreviewItem(id: FileIdentity, state: StagingState, pdf_scale: f64) -> impl IntoView {
    let Some(file) = state
        .staged
        .with_untracked(|set| set.get(&id).map(|entry| entry.file().clone()))
    else {
        return ().into_any();
    };

    let name = file.name();
    let size = format_kilobytes(file.size());
    let id_attr = id.to_string();

    let body = match MediaKind::classify(&file.media_type()) {
        MediaKind::Image => view! { <ImagePreview file=file name=name.clone() /> }.into_any(),
        MediaKind::Pdf => view! { <PdfPreview file=file scale=pdf_scale /> }.into_any(),
        MediaKind::Other => view! { <FilePreview name=name.clone() /> }.into_any(),
    };

    // Stop the click here so the drop zone never sees it
    let on_remove = move |e: ev::MouseEvent| {
        e.stop_propagation();
        state.remove(&id);
    };

    let title = name.clone();
    view! {
        <div class=css::item title=title data-file-id=id_attr>
            {body}
            <div class=css::overlay>
                <div class=css::fileName>{name}</div>
                <div class=css::fileSize>{size}</div>
            </div>
            <button
                type="button"
                class=css::removeButton
                data-action="remove"
                title="Remove file"
                on:click=on_remove
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
    .into_any()
}
