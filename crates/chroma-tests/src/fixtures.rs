//! JSON fixtures shared by the integration tests

use serde::{Deserialize, Serialize};

/// A color string and the bytes it must decode to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringSample {
    pub input: String,
    pub rgba_ui8: [u8; 4],
}

/// Accepted color strings with their expected byte RGBA
pub const STRING_SAMPLES: &str = r##"[
    { "input": "#000",                          "rgba_ui8": [0, 0, 0, 255] },
    { "input": "#0ff",                          "rgba_ui8": [0, 255, 255, 255] },
    { "input": "0xFF8000",                      "rgba_ui8": [255, 128, 0, 255] },
    { "input": "#11223344",                     "rgba_ui8": [17, 34, 51, 68] },
    { "input": "f00a",                          "rgba_ui8": [255, 0, 0, 170] },
    { "input": "rgb(1, 0.5, 0)",                "rgba_ui8": [255, 128, 0, 255] },
    { "input": "rgba(0, 0, 1, 0.5)",            "rgba_ui8": [0, 0, 255, 128] },
    { "input": "RGB(12, 34, 56)",               "rgba_ui8": [12, 34, 56, 255] },
    { "input": "RGBA(12, 34, 56, 78)",          "rgba_ui8": [12, 34, 56, 78] },
    { "input": "RGBa(12, 34, 56, 0.5)",         "rgba_ui8": [12, 34, 56, 128] },
    { "input": "hsl(0.5, 1, 0.5)",              "rgba_ui8": [0, 255, 255, 255] },
    { "input": "hsla(0, 0, 0.2, 0.2)",          "rgba_ui8": [51, 51, 51, 51] },
    { "input": "cmyk(0, 1, 1, 0)",              "rgba_ui8": [255, 0, 0, 255] },
    { "input": "cmyka(0, 0, 0, 0.5, 1)",        "rgba_ui8": [128, 128, 128, 255] },
    { "input": "  rgb(0, 0, 0)  ",              "rgba_ui8": [0, 0, 0, 255] }
]"##;

/// Strings that must be rejected
pub const REJECTED_STRINGS: &[&str] = &[
    "",
    "red",
    "#12",
    "#12345",
    "rgb 0 0 0",
    "rgb(0, 0, zero)",
    "hsv(0, 0, 0)",
    "Hsl(0, 0, 0)",
];

/// Preset definitions in the interchange format
pub const PRESETS: &str = r#"[
    {
        "identifier": "gray",
        "type": "sequential",
        "encoding": "RGB",
        "colors": [
            [0, 0, 0, 255, 255, 255],
            [0, 0, 0, 119, 119, 119, 255, 255, 255]
        ]
    },
    {
        "identifier": "heat",
        "type": "sequential",
        "encoding": "rgb",
        "colors": [
            [0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1]
        ],
        "positions": [
            [0, 0.4, 0.8, 1]
        ]
    },
    {
        "identifier": "split",
        "type": "diverging",
        "encoding": "RGBA",
        "colors": [
            [0, 0, 255, 255, 255, 255, 255, 0, 255, 0, 0, 255]
        ]
    },
    {
        "identifier": "pair",
        "type": "qualitative",
        "encoding": "rgba",
        "colors": [
            [0.1, 0.6, 0.3, 1, 0.9, 0.2, 0.5, 1]
        ]
    }
]"#;

/// Parse [`STRING_SAMPLES`]
pub fn string_samples() -> anyhow::Result<Vec<StringSample>> {
    Ok(serde_json::from_str(STRING_SAMPLES)?)
}
