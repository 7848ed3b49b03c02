use super::views::ChartStyle;

const PLAIN_PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

const STYLED_PALETTE: [&str; 6] = [
    "#5cb0ff", "#3fb68b", "#f7c843", "#f0635c", "#b48cff", "#7ac6ff",
];

/// Cosmetic variant applied to every chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartTheme {
    #[default]
    Plain,
    Styled,
}

impl ChartTheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" | "default" => Some(Self::Plain),
            "styled" | "dark" => Some(Self::Styled),
            _ => None,
        }
    }

    pub const fn style(self) -> ChartStyle {
        match self {
            Self::Plain => ChartStyle {
                template: "plotly_white",
                background: "#ffffff",
                font_color: "#2a3f5f",
            },
            Self::Styled => ChartStyle {
                template: "plotly_dark",
                background: "#111a26",
                font_color: "#e6edf7",
            },
        }
    }

    pub fn color(self, index: usize) -> &'static str {
        let palette: &[&'static str] = match self {
            Self::Plain => &PLAIN_PALETTE,
            Self::Styled => &STYLED_PALETTE,
        };
        palette[index % palette.len()]
    }
}
