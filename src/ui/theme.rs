use ratatui::style::Color;

pub struct Theme {
    pub frame_bg: Color,
    pub backdrop: Color,
    pub fg: Color,
    pub body: Color,
    pub primary: Color,      // Emerald
    pub primary_dark: Color, // Subtitle text
    pub primary_soft: Color, // Keyword chip background
    pub badge_bg: Color,     // Yellow
    pub badge_fg: Color,
    pub muted: Color,    // Grey
    pub disabled: Color, // Light grey
    pub image_bg: Color,
    pub overlay_bg: Color, // Caption and counter background
    pub overlay_fg: Color,
    pub progress_empty: Color,
    pub footer_bg: Color,
    pub success: Color,
    pub error: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    frame_bg: Color::Rgb(255, 255, 255),
    backdrop: Color::Rgb(229, 231, 235),
    fg: Color::Rgb(17, 24, 39),
    body: Color::Rgb(75, 85, 99),
    primary: Color::Rgb(16, 185, 129),
    primary_dark: Color::Rgb(4, 120, 87),
    primary_soft: Color::Rgb(236, 253, 245),
    badge_bg: Color::Rgb(250, 204, 21),
    badge_fg: Color::Rgb(113, 63, 18),
    muted: Color::Rgb(156, 163, 175),
    disabled: Color::Rgb(229, 231, 235),
    image_bg: Color::Rgb(243, 244, 246),
    overlay_bg: Color::Rgb(64, 64, 64),
    overlay_fg: Color::Rgb(255, 255, 255),
    progress_empty: Color::Rgb(209, 213, 219),
    footer_bg: Color::Rgb(249, 250, 251),
    success: Color::Rgb(16, 185, 129),
    error: Color::Rgb(239, 68, 68),
    status_bg: Color::Rgb(50, 50, 70),
};
