//! Zentrale Konfiguration für Robohand.
//!
//! `RobohandOptions` enthält alle Werte, die früher als Konstanten im Canvas
//! steckten. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite in Pixeln.
pub const FRAME_WIDTH: f32 = 800.0;
/// Fensterhöhe in Pixeln.
pub const FRAME_HEIGHT: f32 = 600.0;

// ── Vektoren ────────────────────────────────────────────────────────

/// Startlänge jedes Vektors.
pub const INITIAL_LENGTH: f32 = 30.0;
/// Startwinkel jedes Vektors (Radiant).
pub const INITIAL_ANGLE: f32 = 0.0;
/// Längenänderung pro Tastendruck (Pixel).
pub const LENGTH_DELTA: f32 = 5.0;
/// Winkeländerung pro Tastendruck (Radiant, ca. 5°).
pub const ANGLE_DELTA: f32 = PI / 36.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke der Segmente in Pixeln.
pub const STROKE_WIDTH: f32 = 1.0;
/// Farbe nicht selektierter Vektoren (RGBA: Rot).
pub const VECTOR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des selektierten Vektors (RGBA: Weiß).
pub const SELECTED_VECTOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Hintergrundfarbe des Canvas (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Dateiname der optionalen Konfigurationsdatei neben der Binary.
const CONFIG_FILE_NAME: &str = "robohand.toml";

/// Alle Laufzeit-Optionen. Fehlende Felder in der TOML-Datei fallen auf die
/// Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobohandOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fenstergröße [Breite, Höhe] in Pixeln
    pub frame_size: [f32; 2],

    // ── Vektoren ────────────────────────────────────────────────
    /// Startlänge jedes Vektors
    pub initial_length: f32,
    /// Startwinkel jedes Vektors in Radiant
    pub initial_angle: f32,
    /// Längenänderung pro Vergrößern/Verkleinern
    pub length_delta: f32,
    /// Winkeländerung pro Drehung in Radiant
    pub angle_delta: f32,

    // ── Darstellung ─────────────────────────────────────────────
    pub stroke_width: f32,
    pub vector_color: [f32; 4],
    pub selected_vector_color: [f32; 4],
    pub background_color: [f32; 4],
}

impl Default for RobohandOptions {
    fn default() -> Self {
        Self {
            frame_size: [FRAME_WIDTH, FRAME_HEIGHT],

            initial_length: INITIAL_LENGTH,
            initial_angle: INITIAL_ANGLE,
            length_delta: LENGTH_DELTA,
            angle_delta: ANGLE_DELTA,

            stroke_width: STROKE_WIDTH,
            vector_color: VECTOR_COLOR,
            selected_vector_color: SELECTED_VECTOR_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl RobohandOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("robohand"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
