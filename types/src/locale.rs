//! Display locale for dates and fixed user-facing texts.

use serde::{Deserialize, Serialize};

/// Language used for month/weekday names and the calendar's fixed texts.
///
/// Spanish is the default, matching the published calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

/// Fixed strings shown by the calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleTexts {
    pub page_title: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub error_title: &'static str,
    pub error_hint: &'static str,
    pub search_placeholder: &'static str,
    pub select_all: &'static str,
    pub filters_label: &'static str,
    pub loading: &'static str,
}

const TEXTS_ES: LocaleTexts = LocaleTexts {
    page_title: "Calendario de carreras",
    empty_title: "No hay carreras para mostrar",
    empty_hint: "Selecciona al menos un torneo en los filtros",
    error_title: "Error al cargar el calendario",
    error_hint: "Por favor, recarga la página",
    search_placeholder: "Buscar torneo...",
    select_all: "Seleccionar todos",
    filters_label: "Torneos",
    loading: "Cargando carreras...",
};

const TEXTS_EN: LocaleTexts = LocaleTexts {
    page_title: "Race calendar",
    empty_title: "No races to show",
    empty_hint: "Select at least one tournament in the filters",
    error_title: "Could not load the calendar",
    error_hint: "Please reload the page",
    search_placeholder: "Search tournament...",
    select_all: "Select all",
    filters_label: "Tournaments",
    loading: "Loading races...",
};

impl Locale {
    pub fn texts(self) -> &'static LocaleTexts {
        match self {
            Self::Es => &TEXTS_ES,
            Self::En => &TEXTS_EN,
        }
    }

    /// BCP 47 tag, used for the document `lang` attribute
    pub fn tag(self) -> &'static str {
        match self {
            Self::Es => "es-ES",
            Self::En => "en-US",
        }
    }
}
