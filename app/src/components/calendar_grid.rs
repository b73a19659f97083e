//! Calendar grid: race cards or a full-width placeholder.

use dioxus::prelude::*;
use racecal_core::{CalendarView, Placeholder, RaceCard};

#[derive(Props, Clone, PartialEq)]
pub struct CalendarGridProps {
    pub view: CalendarView,
}

#[component]
pub fn CalendarGrid(props: CalendarGridProps) -> Element {
    rsx! {
        div { id: "calendarGrid", class: "calendar-grid",
            match props.view {
                CalendarView::Loading { text } => rsx! {
                    div { class: "calendar-message",
                        p { "{text}" }
                    }
                },
                CalendarView::Empty(placeholder) => rsx! {
                    CalendarMessage { icon: "🚴", placeholder }
                },
                CalendarView::Error(placeholder) => rsx! {
                    CalendarMessage { icon: "⚠️", placeholder }
                },
                CalendarView::Cards(cards) => rsx! {
                    for (idx, card) in cards.into_iter().enumerate() {
                        RaceCardView { key: "{idx}", card }
                    }
                },
            }
        }
    }
}

#[component]
fn CalendarMessage(icon: &'static str, placeholder: Placeholder) -> Element {
    rsx! {
        div { class: "calendar-message",
            div { class: "icon", "{icon}" }
            h3 { "{placeholder.title}" }
            p { "{placeholder.hint}" }
        }
    }
}

#[component]
fn RaceCardView(card: RaceCard) -> Element {
    rsx! {
        div {
            class: "race-card",
            style: "animation-delay: {card.animation_delay_ms}ms;",
            div { class: "race-date",
                div { class: "date-badge", "{card.day}" }
                div { class: "date-info",
                    div { class: "month-year", "{card.month_year}" }
                }
            }
            h3 { class: "race-title", "{card.title}" }
            div { class: "race-details",
                div { class: "detail-item",
                    span { class: "detail-icon", "📍" }
                    span { "{card.location}" }
                }
                div { class: "detail-item",
                    span { class: "detail-icon", "🏢" }
                    span { "{card.organizer}" }
                }
                div { class: "detail-item",
                    span { class: "detail-icon", "📅" }
                    span { "{card.weekday}" }
                }
            }
            div { class: "race-tags",
                span {
                    class: "tag",
                    style: "background: {card.color};",
                    "data-tournament": "{card.tournament_id}",
                    "{card.tournament_label}"
                }
            }
        }
    }
}
