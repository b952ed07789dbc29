use iced::color;
use iced::theme::Palette;
use iced::Theme;

use crate::settings::Appearance;

/// Resolve the iced Theme from the appearance setting.
pub fn resolve_theme(appearance: Appearance) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = if is_dark {
        dark_palette()
    } else {
        light_palette()
    };

    Theme::custom("VidScribe", palette)
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1b, 0x1b, 0x1f),
        text: color!(0xd4, 0xd4, 0xd8),
        primary: color!(0x4f, 0x9c, 0xf0),
        success: color!(0x34, 0xc7, 0x59),
        warning: color!(0xff, 0xcc, 0x00),
        danger: color!(0xff, 0x45, 0x3a),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf6, 0xf6, 0xf8),
        text: color!(0x1d, 0x1d, 0x1f),
        primary: color!(0x2f, 0x6f, 0xed),
        success: color!(0x28, 0xa7, 0x45),
        warning: color!(0xff, 0x9f, 0x0a),
        danger: color!(0xd7, 0x00, 0x15),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
