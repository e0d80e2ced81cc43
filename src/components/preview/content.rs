//! Per-type preview bodies.
//!
//! Each body decodes its file asynchronously and mounts its element only
//! once the decode resolved; until then a placeholder icon is shown.

use icondata::Icon as IconData;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::PDF_ERROR_MESSAGE;
use crate::models::BrowserFile;
use crate::utils::{read_bytes, read_data_url, render_first_page};

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Image thumbnail from a data URL.
///
/// A failed read degrades to the generic file preview.
#[component]
pub fn ImagePreview(file: BrowserFile, name: String) -> impl IntoView {
    let source = LocalResource::new(move || {
        let file = file.clone();
        async move {
            let result = read_data_url(&file).await;
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("dropstage: image preview: {}", e).into());
            }
            result
        }
    });

    view! {
        <Suspense fallback=move || view! { <Pending icon=ic::FILE_IMAGE /> }>
            {move || {
                let name = name.clone();
                source.get().map(move |result| match result {
                    Ok(src) => view! {
                        <img class=css::thumbnail src=src alt=name data-preview="image" />
                    }.into_any(),
                    Err(_) => view! { <FilePreview name=name /> }.into_any(),
                })
            }}
        </Suspense>
    }
}

/// First PDF page rendered onto a canvas.
///
/// Rendering happens off-screen; the finished canvas is moved into the
/// host element. Any failure replaces the preview with an inline message.
#[component]
pub fn PdfPreview(file: BrowserFile, scale: f64) -> impl IntoView {
    let page = LocalResource::new(move || {
        let file = file.clone();
        async move {
            let result = match read_bytes(&file).await {
                Ok(bytes) => render_first_page(&bytes, scale).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("dropstage: PDF preview: {}", e).into());
            }
            result
        }
    });

    let host = NodeRef::<Div>::new();

    Effect::new(move |_| {
        if let (Some(Ok(canvas)), Some(host)) = (page.get(), host.get()) {
            canvas.set_class_name(css::thumbnail);
            let _ = host.replace_children_with_node_1(&canvas);
        }
    });

    view! {
        <Suspense fallback=move || view! { <Pending icon=ic::FILE_PDF /> }>
            {move || page.get().map(|result| match result {
                Ok(_) => view! {
                    <div class=css::canvasHost node_ref=host data-preview="pdf"></div>
                }.into_any(),
                Err(_) => view! { <PreviewFailed message=PDF_ERROR_MESSAGE /> }.into_any(),
            })}
        </Suspense>
    }
}

/// Generic file icon with the file name.
#[component]
pub fn FilePreview(name: String) -> impl IntoView {
    view! {
        <div class=css::fileInfo data-preview="icon">
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <p>{name}</p>
        </div>
    }
}

/// Inline error in place of a preview.
#[component]
fn PreviewFailed(message: &'static str) -> impl IntoView {
    view! {
        <div class=css::error role="alert" data-preview="error">
            <span class=css::icon aria-hidden="true"><Icon icon=ic::WARNING /></span>
            <p>{message}</p>
        </div>
    }
}

/// Placeholder while a preview is decoding.
#[component]
fn Pending(icon: IconData) -> impl IntoView {
    view! {
        <div class=css::pending data-preview="pending">
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
        </div>
    }
}
