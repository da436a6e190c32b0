//! Catalog and validation handlers.

use axum::{Json, extract::Query, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::checksum::{digits_of, verify_check_digit};
use crate::linear::complete_digits;
use crate::style::{PresetPalette, Shape, palette};
use crate::symbology::{Symbology, is_valid_barcode};

/// Symbology metadata returned by the API.
#[derive(Debug, Serialize)]
pub struct SymbologyInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub is_2d: bool,
    pub allows_letters: bool,
    pub required_digit_length: Option<usize>,
}

impl From<Symbology> for SymbologyInfo {
    fn from(symbology: Symbology) -> Self {
        Self {
            name: symbology.name(),
            label: symbology.label(),
            is_2d: symbology.is_2d(),
            allows_letters: symbology.allows_letters(),
            required_digit_length: symbology.required_digit_length(),
        }
    }
}

/// GET /api/symbologies - List supported symbologies.
pub async fn symbologies() -> Json<Vec<SymbologyInfo>> {
    Json(Symbology::ALL.into_iter().map(SymbologyInfo::from).collect())
}

/// GET /api/palettes - List preset palettes.
pub async fn palettes() -> Json<&'static [PresetPalette]> {
    Json(palette::all())
}

/// GET /api/shapes - List module/finder shape names.
pub async fn shapes() -> Json<Vec<&'static str>> {
    Json(Shape::ALL.into_iter().map(Shape::name).collect())
}

/// Query parameters for the validate endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    pub content: String,
    pub symbology: String,
}

/// Validation result.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateResponse {
    pub valid: bool,
    /// Check-digit-completed code for fixed-length numeric symbologies.
    pub code: Option<String>,
    /// Whether a supplied check digit matches; computed digits always do.
    pub check_digit_ok: Option<bool>,
}

/// GET /api/validate - Check content against a symbology.
pub async fn validate(
    Query(query): Query<ValidateQuery>,
) -> Result<Json<ValidateResponse>, (StatusCode, String)> {
    let symbology: Symbology = query
        .symbology
        .parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let valid = is_valid_barcode(&query.content, symbology);
    let (code, check_digit_ok) = match (valid, symbology.checksum_scheme()) {
        (true, Some(scheme)) => {
            let supplied = digits_of(&query.content);
            let check_digit_ok = if supplied.len() == scheme.data_length() + 1 {
                verify_check_digit(&supplied, scheme).ok()
            } else {
                Some(true)
            };
            let code = complete_digits(&query.content, symbology)
                .ok()
                .map(|digits| digits.iter().map(|d| char::from(b'0' + d)).collect());
            (code, check_digit_ok)
        }
        _ => (None, None),
    };

    Ok(Json(ValidateResponse {
        valid,
        code,
        check_digit_ok,
    }))
}
