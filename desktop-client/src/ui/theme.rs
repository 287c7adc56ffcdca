use eframe::egui::Color32;

pub const THEME_NAMES: [&str; 2] = ["neon", "classic"];

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color32,
    pub grid_line: Color32,
    pub snake_head: Color32,
    pub snake_tail: Color32,
    pub food: Color32,
    pub overlay: Color32,
    pub text: Color32,
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            name: "neon",
            background: Color32::from_rgb(0x05, 0x09, 0x11),
            grid_line: Color32::from_rgba_unmultiplied(255, 255, 255, 8),
            snake_head: Color32::from_rgb(0x3e, 0xff, 0x8a),
            snake_tail: Color32::from_rgb(0x1f, 0x9e, 0xd1),
            food: Color32::from_rgb(0xff, 0x5f, 0x76),
            overlay: Color32::from_rgba_unmultiplied(5, 6, 10, 166),
            text: Color32::WHITE,
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color32::from_rgb(0x9b, 0xbc, 0x0f),
            grid_line: Color32::from_rgba_unmultiplied(0, 0, 0, 12),
            snake_head: Color32::from_rgb(0x0f, 0x38, 0x0f),
            snake_tail: Color32::from_rgb(0x30, 0x62, 0x30),
            food: Color32::from_rgb(0x8b, 0x1e, 0x1e),
            overlay: Color32::from_rgba_unmultiplied(15, 56, 15, 170),
            text: Color32::from_rgb(0xe0, 0xf8, 0xd0),
        }
    }

    /// Unknown names fall back to neon.
    pub fn by_name(name: &str) -> Self {
        match name {
            "classic" => Self::classic(),
            _ => Self::neon(),
        }
    }

    /// Colour of segment `index` in a chain of `len`, head to tail.
    pub fn segment_color(&self, index: usize, len: usize) -> Color32 {
        if len <= 1 {
            return self.snake_head;
        }
        let t = index as f32 / (len - 1) as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            mix(self.snake_head.r(), self.snake_tail.r()),
            mix(self.snake_head.g(), self.snake_tail.g()),
            mix(self.snake_head.b(), self.snake_tail.b()),
        )
    }
}
