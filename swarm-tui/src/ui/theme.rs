use ratatui::style::Color;
use crate::app::App;
use swarm_types::ColorScheme;

pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

/// Theme colors for the app's current color scheme
pub fn get_theme_colors(app: &App) -> ThemeColors {
    theme_for(app.color_scheme)
}

/// Palette for a color scheme
pub fn theme_for(scheme: ColorScheme) -> ThemeColors {
    match scheme {
        // Swarm - warm amber on charcoal
        ColorScheme::Default => ThemeColors {
            primary: Color::Rgb(255, 191, 0),     // Amber
            secondary: Color::Rgb(255, 140, 60),  // Orange
            accent: Color::Rgb(120, 200, 255),    // Sky blue
            text: Color::Rgb(235, 230, 220),      // Warm white
            text_dim: Color::Rgb(140, 135, 125),  // Warm gray
            background: Color::Black,
            border: Color::Rgb(110, 90, 40),      // Dark amber
            success: Color::Rgb(130, 220, 120),
            warning: Color::Rgb(255, 210, 90),
            error: Color::Rgb(255, 90, 90),
            highlight_bg: Color::Rgb(50, 40, 10), // Very dark amber
        },

        // Night hive: deep slate with teal and violet
        ColorScheme::Dark => ThemeColors {
            primary: Color::Rgb(80, 210, 190),
            secondary: Color::Rgb(170, 140, 255),
            accent: Color::Rgb(255, 185, 70),
            text: Color::Rgb(215, 220, 225),
            text_dim: Color::Rgb(115, 125, 135),
            background: Color::Rgb(16, 20, 26),
            border: Color::Rgb(50, 62, 74),
            success: Color::Rgb(110, 230, 140),
            warning: Color::Rgb(250, 195, 85),
            error: Color::Rgb(245, 95, 105),
            highlight_bg: Color::Rgb(32, 42, 52),
        },

        // Paper: honey accents on cream for bright terminals
        ColorScheme::Light => ThemeColors {
            primary: Color::Rgb(150, 95, 0),
            secondary: Color::Rgb(30, 100, 160),
            accent: Color::Rgb(175, 40, 95),
            text: Color::Rgb(35, 30, 25),
            text_dim: Color::Rgb(110, 100, 90),
            background: Color::Rgb(250, 246, 236),
            border: Color::Rgb(200, 185, 155),
            success: Color::Rgb(20, 130, 60),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Rgb(185, 30, 30),
            highlight_bg: Color::Rgb(240, 225, 190),
        },

        // Solarized dark base with its standard accent set
        ColorScheme::Solarized => ThemeColors {
            primary: Color::Rgb(181, 137, 0),    // yellow
            secondary: Color::Rgb(42, 161, 152), // cyan
            accent: Color::Rgb(108, 113, 196),   // violet
            text: Color::Rgb(147, 161, 161),     // base1
            text_dim: Color::Rgb(88, 110, 117),  // base01
            background: Color::Rgb(0, 43, 54),   // base03
            border: Color::Rgb(7, 54, 66),       // base02
            success: Color::Rgb(133, 153, 0),    // green
            warning: Color::Rgb(203, 75, 22),    // orange
            error: Color::Rgb(220, 50, 47),      // red
            highlight_bg: Color::Rgb(7, 54, 66),
        },
    }
}
