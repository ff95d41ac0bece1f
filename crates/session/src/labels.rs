use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the labels produced for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Summary for a stage reached without any condition record.
    pub fn base_stage(self) -> &'static str {
        match self {
            Locale::Es => "Evolución base",
            Locale::En => "base stage",
        }
    }

    /// Summary for a condition record with none of the summarized fields set.
    pub fn special_conditions(self) -> &'static str {
        match self {
            Locale::Es => "Condiciones especiales",
            Locale::En => "special conditions",
        }
    }

    pub fn unknown_habitat(self) -> &'static str {
        match self {
            Locale::Es => "Desconocido",
            Locale::En => "Unknown",
        }
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Locale::Es, true) => "Sí",
            (Locale::Es, false) => "No",
            (Locale::En, true) => "Yes",
            (Locale::En, false) => "No",
        }
    }

    pub fn list_fetch_failed(self) -> &'static str {
        match self {
            Locale::Es => "Error al cargar las especies de Pokémon",
            Locale::En => "Failed to load the species list",
        }
    }

    pub fn detail_fetch_failed(self) -> &'static str {
        match self {
            Locale::Es => "Error al cargar los detalles del Pokémon",
            Locale::En => "Failed to load the species details",
        }
    }

    /// "2 de 3" / "2 of 3"
    pub fn position(self, index: u64, total: u64) -> String {
        match self {
            Locale::Es => format!("{index} de {total}"),
            Locale::En => format!("{index} of {total}"),
        }
    }

    /// "Página 2 de 52" / "Page 2 of 52"
    pub fn page_position(self, index: u32, total: u32) -> String {
        let position = self.position(u64::from(index), u64::from(total));
        match self {
            Locale::Es => format!("Página {position}"),
            Locale::En => format!("Page {position}"),
        }
    }

    pub fn condition(self, fragment: ConditionFragment<'_>) -> String {
        match (self, fragment) {
            (Locale::Es, ConditionFragment::Level(level)) => format!("Nivel {level}"),
            (Locale::Es, ConditionFragment::Happiness(value)) => format!("Felicidad {value}"),
            (Locale::Es, ConditionFragment::Affection(value)) => format!("Cariño {value}"),
            (Locale::Es, ConditionFragment::Item(item)) => format!("Objeto: {item}"),
            (Locale::Es, ConditionFragment::Trade) => "Intercambio".to_string(),
            (Locale::Es, ConditionFragment::TimeOfDay(time)) => format!("Por la {time}"),
            (Locale::Es, ConditionFragment::KnownMoveType(kind)) => {
                format!("Movimiento tipo {kind}")
            }
            (Locale::En, ConditionFragment::Level(level)) => format!("Level {level}"),
            (Locale::En, ConditionFragment::Happiness(value)) => format!("Happiness {value}"),
            (Locale::En, ConditionFragment::Affection(value)) => format!("Affection {value}"),
            (Locale::En, ConditionFragment::Item(item)) => format!("Item: {item}"),
            (Locale::En, ConditionFragment::Trade) => "Trade".to_string(),
            (Locale::En, ConditionFragment::TimeOfDay(time)) => format!("During the {time}"),
            (Locale::En, ConditionFragment::KnownMoveType(kind)) => {
                format!("Knows a {kind}-type move")
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(SessionError::UnknownLocale(other.to_string())),
        }
    }
}

/// One summarized piece of an evolution condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFragment<'a> {
    Level(u32),
    Happiness(u32),
    Affection(u32),
    Item(&'a str),
    Trade,
    TimeOfDay(&'a str),
    KnownMoveType(&'a str),
}

/// Closed set of species colors known to the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCode {
    Black,
    Blue,
    Brown,
    Gray,
    Green,
    Pink,
    Purple,
    Red,
    White,
    Yellow,
}

impl ColorCode {
    pub const ALL: [ColorCode; 10] = [
        ColorCode::Black,
        ColorCode::Blue,
        ColorCode::Brown,
        ColorCode::Gray,
        ColorCode::Green,
        ColorCode::Pink,
        ColorCode::Purple,
        ColorCode::Red,
        ColorCode::White,
        ColorCode::Yellow,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            ColorCode::Black => "black",
            ColorCode::Blue => "blue",
            ColorCode::Brown => "brown",
            ColorCode::Gray => "gray",
            ColorCode::Green => "green",
            ColorCode::Pink => "pink",
            ColorCode::Purple => "purple",
            ColorCode::Red => "red",
            ColorCode::White => "white",
            ColorCode::Yellow => "yellow",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => match self {
                ColorCode::Black => "Negro",
                ColorCode::Blue => "Azul",
                ColorCode::Brown => "Marrón",
                ColorCode::Gray => "Gris",
                ColorCode::Green => "Verde",
                ColorCode::Pink => "Rosa",
                ColorCode::Purple => "Morado",
                ColorCode::Red => "Rojo",
                ColorCode::White => "Blanco",
                ColorCode::Yellow => "Amarillo",
            },
            Locale::En => match self {
                ColorCode::Black => "Black",
                ColorCode::Blue => "Blue",
                ColorCode::Brown => "Brown",
                ColorCode::Gray => "Gray",
                ColorCode::Green => "Green",
                ColorCode::Pink => "Pink",
                ColorCode::Purple => "Purple",
                ColorCode::Red => "Red",
                ColorCode::White => "White",
                ColorCode::Yellow => "Yellow",
            },
        }
    }
}

/// Display label for a raw color code; codes outside [`ColorCode`] are returned verbatim.
pub fn color_label(code: &str, locale: Locale) -> String {
    match ColorCode::from_code(code) {
        Some(color) => color.label(locale).to_string(),
        None => code.to_string(),
    }
}
