/// Opaque RGB colour; alpha is always written as 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor` (clamped to 0..=1).
    pub fn shade(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (f64::from(self.r) * f) as u8,
            g: (f64::from(self.g) * f) as u8,
            b: (f64::from(self.b) * f) as u8,
        }
    }

    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Hue ramp red -> yellow -> green -> cyan -> blue, sampled evenly
/// across `n` requests.
pub struct ColorRamp {
    n: usize,
    colors: Vec<Color>,
    count: usize,
}

impl ColorRamp {
    const STEPS: usize = 1020;

    pub fn new(n: usize) -> Self {
        let mut colors = Vec::with_capacity(Self::STEPS);
        let mut color = Color::RED;
        let quarter = Self::STEPS / 4;
        for i in 0..Self::STEPS {
            colors.push(color);
            match i / quarter {
                0 => color.g = color.g.saturating_add(1),
                1 => color.r = color.r.saturating_sub(1),
                2 => color.b = color.b.saturating_add(1),
                _ => color.g = color.g.saturating_sub(1),
            }
        }
        Self { n: n.max(1), colors, count: 0 }
    }

    pub fn next_color(&mut self) -> Color {
        let index = (self.count * self.colors.len() / self.n).min(self.colors.len() - 1);
        self.count += 1;
        self.colors[index]
    }
}
