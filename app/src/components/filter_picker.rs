//! Tournament filter picker: chip summary plus a searchable checkbox dropdown.
//!
//! Chips and checkboxes are two views of the same active set. All changes go
//! through the calendar store; nothing here keeps its own filter state.

use dioxus::prelude::*;
use racecal_core::{CheckboxRow, ClickTarget, Command};
use racecal_types::{Locale, Tournament};

use crate::store::use_calendar;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPickerProps {
    pub chips: Vec<Tournament>,
    pub rows: Vec<CheckboxRow>,
    pub all_selected: bool,
    pub search_term: String,
    pub open: bool,
    pub locale: Locale,
}

#[component]
pub fn FilterPicker(props: FilterPickerProps) -> Element {
    let mut store = use_calendar();
    let texts = props.locale.texts();
    let dropdown_class = if props.open { "dropdown active" } else { "dropdown" };

    rsx! {
        div {
            id: "chipsWrapper",
            class: "chips-wrapper",
            onclick: move |e| {
                e.stop_propagation();
                store.dispatch(Command::PickerClick(ClickTarget::Summary));
            },
            span { class: "filters-label", "{texts.filters_label}" }
            div { id: "chipsContainer", class: "chips-container",
                for chip in props.chips.iter() {
                    Chip { key: "{chip.id}", tournament: chip.clone() }
                }
            }
            span { class: "dropdown-arrow",
                if props.open { "▲" } else { "▼" }
            }

            // Clicks inside the panel must neither toggle nor close it
            div {
                id: "dropdown",
                class: dropdown_class,
                onclick: move |e| {
                    e.stop_propagation();
                    store.dispatch(Command::PickerClick(ClickTarget::Panel));
                },
                input {
                    id: "searchInput",
                    class: "search-input",
                    r#type: "text",
                    placeholder: texts.search_placeholder,
                    value: "{props.search_term}",
                    oninput: move |e| store.dispatch(Command::SetSearchTerm(e.value())),
                }
                label { class: "checkbox-item select-all",
                    input {
                        id: "selectAll",
                        r#type: "checkbox",
                        checked: props.all_selected,
                        onchange: move |e| store.dispatch(Command::SelectAll(e.checked())),
                    }
                    span { class: "checkbox-label", "{texts.select_all}" }
                }
                div { id: "checkboxList", class: "checkbox-list",
                    for row in props.rows.iter() {
                        label {
                            key: "{row.id}",
                            class: "checkbox-item",
                            display: if row.visible { "flex" } else { "none" },
                            "data-tournament": "{row.id}",
                            input {
                                id: "filter-{row.id}",
                                r#type: "checkbox",
                                checked: row.checked,
                                onchange: {
                                    let id = row.id.clone();
                                    move |e: FormEvent| {
                                        store.dispatch(Command::SetFilter(id.clone(), e.checked()))
                                    }
                                },
                            }
                            span { class: "checkbox-label", "{row.label}" }
                            span { class: "color-dot", background: "{row.color}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Chip(tournament: Tournament) -> Element {
    let mut store = use_calendar();
    let id = tournament.id.clone();

    rsx! {
        div { class: "chip", background: "{tournament.color}",
            span { "{tournament.label}" }
            button {
                class: "chip-close",
                r#type: "button",
                onclick: move |e| {
                    e.stop_propagation();
                    store.dispatch(Command::RemoveFilter(id.clone()));
                },
                "✕"
            }
        }
    }
}
