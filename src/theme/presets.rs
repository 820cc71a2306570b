//! Built-in Solarized themes, used when no settings file is given.

use crate::theme::color::ColorDef;
use crate::theme::settings::{ColorSettings, NormalColors, Settings};

fn palette(colors: [u32; 5]) -> [ColorDef; 5] {
    colors.map(ColorDef::from_hex)
}

/// Solarized Light, written to `profile-solarized-light.svg`.
pub fn solarized_light() -> Settings {
    Settings {
        colors: ColorSettings::Normal(NormalColors {
            contrib_colors: palette([0xeee8d5, 0xd3dc9b, 0xafc062, 0x859900, 0x5f6e00]),
        }),
        background_color: ColorDef::from_hex(0xfdf6e3),
        foreground_color: ColorDef::from_hex(0x657b83),
        strong_color: ColorDef::from_hex(0xcb4b16),
        weak_color: ColorDef::from_hex(0x93a1a1),
        growing_animation: false,
        l10n: None,
        file_name: Some("profile-solarized-light.svg".to_owned()),
    }
}

/// Solarized Dark, written to `profile-solarized-dark.svg`.
pub fn solarized_dark() -> Settings {
    Settings {
        colors: ColorSettings::Normal(NormalColors {
            contrib_colors: palette([0x073642, 0x2e5a1c, 0x57790e, 0x859900, 0xb4c44a]),
        }),
        background_color: ColorDef::from_hex(0x002b36),
        foreground_color: ColorDef::from_hex(0x839496),
        strong_color: ColorDef::from_hex(0xb58900),
        weak_color: ColorDef::from_hex(0x586e75),
        growing_animation: false,
        l10n: None,
        file_name: Some("profile-solarized-dark.svg".to_owned()),
    }
}

/// Both built-in themes, light first.
pub fn builtin() -> [Settings; 2] {
    [solarized_light(), solarized_dark()]
}

#[cfg(test)]
#[path = "../../tests/unit/theme/presets.rs"]
mod tests;
