use ratatui::style::Color;

/// Theme color palette defining all colors used in the dashboard.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_alert: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification for a single RGB value.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        let blue = rgb(125, 207, 255);
        let green = rgb(158, 206, 106);
        let magenta = rgb(255, 159, 196);
        let yellow = rgb(255, 202, 40);
        let red = rgb(247, 118, 142);
        let comment = rgb(117, 121, 148);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            secondary: green,
            accent: magenta,
            banner: magenta,
            text: rgb(169, 177, 214),
            text_secondary: rgb(192, 202, 245),
            text_muted: comment,
            success: green,
            warning: yellow,
            error: red,
            info: blue,
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: rgb(26, 27, 38),
            footer_search: blue,
            footer_edit: yellow,
            footer_alert: red,
            footer_normal: comment,
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        let purple = rgb(189, 147, 249);
        let cyan = rgb(139, 233, 253);
        let pink = rgb(255, 121, 198);
        let orange = rgb(255, 184, 108);
        let red = rgb(255, 85, 85);
        let comment = rgb(98, 114, 164);
        Theme {
            name: "dracula".to_string(),
            primary: purple,
            secondary: cyan,
            accent: pink,
            banner: pink,
            text: rgb(248, 248, 242),
            text_secondary: purple,
            text_muted: comment,
            success: rgb(80, 250, 123),
            warning: orange,
            error: red,
            info: cyan,
            border_active: purple,
            border_normal: comment,
            highlight_bg: cyan,
            highlight_fg: rgb(40, 42, 54),
            footer_search: cyan,
            footer_edit: orange,
            footer_alert: red,
            footer_normal: comment,
        }
    }

    /// Rose Pine Dawn theme, for light terminals.
    ///
    pub fn rose_pine_dawn() -> Self {
        let purple = rgb(161, 119, 255);
        let pine = rgb(59, 247, 209);
        let pink = rgb(255, 109, 146);
        let gold = rgb(255, 210, 0);
        let love = rgb(235, 111, 146);
        let foam = rgb(61, 174, 233);
        let text = rgb(88, 82, 96);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: purple,
            secondary: pine,
            accent: pink,
            banner: pink,
            text,
            text_secondary: rgb(121, 117, 147),
            text_muted: rgb(152, 147, 165),
            success: pine,
            warning: gold,
            error: love,
            info: foam,
            border_active: purple,
            border_normal: text,
            highlight_bg: foam,
            highlight_fg: rgb(250, 244, 237),
            footer_search: foam,
            footer_edit: gold,
            footer_alert: love,
            footer_normal: text,
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
