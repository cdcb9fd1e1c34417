use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Supported per-key RGB keyboard models.
///
/// The identifier is passed verbatim to the lighting binary's `--model` flag
/// and selects which device layout it addresses. Serde goes through
/// [`FromStr`] and [`Model::as_str`], so config files may use any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Model {
    /// GE63.
    Ge63,
    /// GE73.
    Ge73,
    /// GE75.
    Ge75,
    /// GS63.
    Gs63,
    /// GS73.
    Gs73,
    /// GS75.
    Gs75,
    /// GX63.
    Gx63,
    /// GT63.
    Gt63,
    /// GL63.
    Gl63,
    /// GS65.
    #[default]
    Gs65,
}

impl Model {
    /// Every supported model, in the order the lighting tool documents them.
    pub const ALL: [Model; 10] = [
        Model::Ge63,
        Model::Ge73,
        Model::Ge75,
        Model::Gs63,
        Model::Gs73,
        Model::Gs75,
        Model::Gx63,
        Model::Gt63,
        Model::Gl63,
        Model::Gs65,
    ];

    /// Identifier as understood by the lighting binary.
    pub const fn as_str(self) -> &'static str {
        match self {
            Model::Ge63 => "GE63",
            Model::Ge73 => "GE73",
            Model::Ge75 => "GE75",
            Model::Gs63 => "GS63",
            Model::Gs73 => "GS73",
            Model::Gs75 => "GS75",
            Model::Gx63 => "GX63",
            Model::Gt63 => "GT63",
            Model::Gl63 => "GL63",
            Model::Gs65 => "GS65",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = CoreError;

    /// Parses a model identifier, ignoring ASCII case.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownModel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl TryFrom<String> for Model {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.as_str().to_string()
    }
}
