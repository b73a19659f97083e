//! Root component: loads the races once and lays out the page.

use dioxus::prelude::*;
use racecal_core::{ClickTarget, Command, RenderOptions, ViewSnapshot};
use racecal_types::Locale;

use crate::api;
use crate::components::{CalendarGrid, FilterPicker};
use crate::config::load_config;
use crate::store::use_calendar_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Set the document `lang` attribute so the browser hyphenates correctly
fn set_document_lang(locale: Locale) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale.tag());
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let locale = config.locale;
    let mut store = use_calendar_provider(RenderOptions::from(&config));

    use_hook(move || set_document_lang(locale));

    // Single load attempt
    let data_url = config.data_url.clone();
    use_future(move || {
        let url = data_url.clone();
        async move {
            let result = api::fetch_races(&url).await;
            store.finish_load(result);
        }
    });

    let ViewSnapshot {
        calendar,
        chips,
        rows,
        all_selected,
        search_term,
        picker_open,
    } = store.snapshot();
    let texts = locale.texts();
    let container_class = if picker_open {
        "calendar-container dropdown-open"
    } else {
        "calendar-container"
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div {
            class: "app",
            // Picker and summary stop propagation, so anything reaching here is outside
            onclick: move |_| store.dispatch(Command::PickerClick(ClickTarget::Outside)),
            header { class: "header",
                h1 { "{texts.page_title}" }
            }
            FilterPicker {
                chips,
                rows,
                all_selected,
                search_term,
                open: picker_open,
                locale,
            }
            div { class: container_class,
                CalendarGrid { view: calendar }
            }
        }
    }
}
