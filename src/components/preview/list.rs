//! Preview list mounted into the page's preview container.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use web_sys::HtmlInputElement;

use dropstage_core::FileIdentity;

use super::item::PreviewItem;
use crate::app::StagingState;
use crate::components::icons as ic;
use crate::config::SELECT_MORE_LABEL;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// All staged previews in staging order, followed by a "select more"
/// control once at least one file is staged.
///
/// `input` is the page's file input; the control reopens its picker.
#[component]
pub fn PreviewList(state: StagingState, input: HtmlInputElement, pdf_scale: f64) -> impl IntoView {
    let input = StoredValue::new_local(input);

    let open_picker = move |_: ev::MouseEvent| {
        input.with_value(|input| input.click());
    };

    let add_more_display = move || {
        if state.staged.with(|set| set.view().add_more_visible) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class=css::list>
            <For
                each=move || state.staged.with(|set| set.identities())
                key=|id: &FileIdentity| id.clone()
                children=move |id| {
                    view! { <PreviewItem id=id state=state pdf_scale=pdf_scale /> }
                }
            />
        </div>
        <div class=css::addMore style:display=add_more_display data-action="add-more">
            <button type="button" class=css::addMoreButton on:click=open_picker>
                <Icon icon=ic::PLUS />
                " "
                {SELECT_MORE_LABEL}
            </button>
        </div>
    }
}
