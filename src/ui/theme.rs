use ratatui::style::Color;

use crate::{
    cli::ThemeArg,
    domain::{
        air_quality::AqiBand,
        weather::{UvBand, WeatherCategory},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub popup_surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub rain: Color,
    pub wind: Color,
    pub temp_freezing: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
    capability: ColorCapability,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        ColorCapability::TrueColor
    } else {
        ColorCapability::Basic16
    }
}

/// Palette for the chosen theme, accented by the current sky.
pub fn theme_for(choice: ThemeArg, category: WeatherCategory, is_day: bool) -> Theme {
    palette(choice, category, is_day, detect_color_capability())
}

fn palette(
    choice: ThemeArg,
    category: WeatherCategory,
    is_day: bool,
    capability: ColorCapability,
) -> Theme {
    let accent = match (category, is_day) {
        (WeatherCategory::Clear, true) => (255, 196, 61),
        (WeatherCategory::Clear, false) => (173, 216, 255),
        (WeatherCategory::Rain | WeatherCategory::Thunder, _) => (94, 180, 255),
        (WeatherCategory::Snow, _) => (220, 236, 255),
        (WeatherCategory::Fog, _) => (190, 196, 204),
        _ => (140, 200, 235),
    };

    let theme = match choice {
        ThemeArg::Dark => Theme {
            surface: rgb((16, 20, 28)),
            popup_surface: rgb((30, 36, 48)),
            text: rgb((230, 235, 242)),
            muted_text: rgb((140, 150, 165)),
            accent: rgb(accent),
            border: rgb((70, 82, 100)),
            highlight: rgb((44, 56, 78)),
            info: rgb((120, 190, 255)),
            warning: rgb((255, 200, 87)),
            danger: rgb((255, 107, 107)),
            rain: rgb((102, 170, 255)),
            wind: rgb((200, 220, 235)),
            temp_freezing: rgb((150, 200, 255)),
            temp_cold: rgb((110, 170, 255)),
            temp_mild: rgb((140, 220, 160)),
            temp_warm: rgb((255, 200, 87)),
            temp_hot: rgb((255, 120, 90)),
            capability,
        },
        ThemeArg::Light => Theme {
            surface: rgb((246, 248, 251)),
            popup_surface: rgb((255, 255, 255)),
            text: rgb((28, 34, 44)),
            muted_text: rgb((96, 106, 120)),
            accent: rgb(darken(accent)),
            border: rgb((170, 180, 195)),
            highlight: rgb((214, 226, 244)),
            info: rgb((20, 100, 190)),
            warning: rgb((170, 110, 0)),
            danger: rgb((190, 30, 45)),
            rain: rgb((30, 100, 200)),
            wind: rgb((70, 90, 110)),
            temp_freezing: rgb((40, 110, 200)),
            temp_cold: rgb((20, 80, 180)),
            temp_mild: rgb((30, 130, 70)),
            temp_warm: rgb((180, 110, 0)),
            temp_hot: rgb((200, 60, 30)),
            capability,
        },
    };

    if capability == ColorCapability::Basic16 {
        return theme.quantized();
    }
    theme
}

impl Theme {
    pub fn temp_color(&self, celsius: f32) -> Color {
        let color = match celsius {
            t if t <= 0.0 => self.temp_freezing,
            t if t <= 10.0 => self.temp_cold,
            t if t <= 20.0 => self.temp_mild,
            t if t <= 28.0 => self.temp_warm,
            _ => self.temp_hot,
        };
        self.fit(color)
    }

    pub fn aqi_color(&self, band: AqiBand) -> Color {
        let (r, g, b) = band.rgb();
        self.fit(Color::Rgb(r, g, b))
    }

    pub fn uv_color(&self, band: UvBand) -> Color {
        match band {
            UvBand::Low => self.temp_mild,
            UvBand::Moderate => self.warning,
            UvBand::High | UvBand::VeryHigh => self.temp_hot,
            UvBand::Extreme => self.danger,
        }
    }

    fn fit(&self, color: Color) -> Color {
        match self.capability {
            ColorCapability::TrueColor => color,
            ColorCapability::Basic16 => quantize(color),
        }
    }

    fn quantized(self) -> Self {
        Self {
            surface: quantize(self.surface),
            popup_surface: quantize(self.popup_surface),
            text: quantize(self.text),
            muted_text: quantize(self.muted_text),
            accent: quantize(self.accent),
            border: quantize(self.border),
            highlight: quantize(self.highlight),
            info: quantize(self.info),
            warning: quantize(self.warning),
            danger: quantize(self.danger),
            rain: quantize(self.rain),
            wind: quantize(self.wind),
            temp_freezing: quantize(self.temp_freezing),
            temp_cold: quantize(self.temp_cold),
            temp_mild: quantize(self.temp_mild),
            temp_warm: quantize(self.temp_warm),
            temp_hot: quantize(self.temp_hot),
            capability: self.capability,
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn darken((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    (r / 2, g / 2, b / 2)
}

/// Nearest of the sixteen ANSI colors by squared distance.
pub fn quantize(color: Color) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    const ANSI: [(Color, (i32, i32, i32)); 16] = [
        (Color::Black, (0, 0, 0)),
        (Color::Red, (205, 49, 49)),
        (Color::Green, (13, 188, 121)),
        (Color::Yellow, (229, 229, 16)),
        (Color::Blue, (36, 114, 200)),
        (Color::Magenta, (188, 63, 188)),
        (Color::Cyan, (17, 168, 205)),
        (Color::Gray, (204, 204, 204)),
        (Color::DarkGray, (102, 102, 102)),
        (Color::LightRed, (241, 76, 76)),
        (Color::LightGreen, (35, 209, 139)),
        (Color::LightYellow, (245, 245, 67)),
        (Color::LightBlue, (59, 142, 234)),
        (Color::LightMagenta, (214, 112, 214)),
        (Color::LightCyan, (41, 184, 219)),
        (Color::White, (229, 229, 229)),
    ];
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    ANSI.iter()
        .min_by_key(|(_, (ar, ag, ab))| (r - ar).pow(2) + (g - ag).pow(2) + (b - ab).pow(2))
        .map_or(Color::White, |(c, _)| *c)
}
