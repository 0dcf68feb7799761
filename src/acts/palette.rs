//! Fixed sequence palette.

pub const CYAN: [f32; 3] = [0.094, 0.902, 1.0]; // #18E6FF
pub const VIOLET: [f32; 3] = [0.482, 0.173, 1.0]; // #7B2CFF
pub const MAGENTA: [f32; 3] = [1.0, 0.239, 0.949]; // #FF3DF2
pub const GOLD: [f32; 3] = [1.0, 0.843, 0.0]; // #FFD700
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

#[inline]
pub fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)]
}

/// HSL to RGB, all components in [0, 1]. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::hsl_to_rgb;

    #[test]
    fn primary_hues() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-5 && red[1] < 1e-5 && red[2] < 1e-5);
        let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!(green[1] > 0.99 && green[0] < 1e-4);
        let blue = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
        assert!(blue[2] > 0.99 && blue[1] < 1e-4);
    }

    #[test]
    fn hue_wraps() {
        let a = hsl_to_rgb(0.25, 1.0, 0.5);
        let b = hsl_to_rgb(1.25, 1.0, 0.5);
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        let g = hsl_to_rgb(0.4, 0.0, 0.7);
        assert!((g[0] - 0.7).abs() < 1e-5);
        assert!((g[0] - g[1]).abs() < 1e-6 && (g[1] - g[2]).abs() < 1e-6);
    }
}
