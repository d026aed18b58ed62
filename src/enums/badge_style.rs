use comfy_table::Color;

/// Colour class of a status badge in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
}

impl BadgeStyle {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Danger => Color::Red,
            Self::Primary => Color::Blue,
            Self::Secondary => Color::DarkGrey,
        }
    }
}
