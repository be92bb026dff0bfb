//! Color-space conversion math: sRGB ↔ linear, HSL ↔ RGB, sRGB ↔ OKLCh.
//!
//! OKLab/OKLCh uses the Ottosson matrices. All RGB values are sRGB in 0..1;
//! hues are degrees; HSL saturation/lightness and OKLCh lightness are 0..1.

/// sRGB electro-optical transfer: gamma-encoded channel → linear light.
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse transfer: linear light → gamma-encoded channel.
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// RGB → HSL. Returns (hue degrees, saturation, lightness); achromatic
/// colors get hue 0 rather than an undefined angle.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());

    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s.clamp(0.0, 1.0), l)
}

/// HSL → RGB.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// sRGB → OKLCh. Returns (lightness, chroma, hue degrees); near-achromatic
/// colors get hue 0.
pub(crate) fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);

    let l = 0.412_221_470_8 * lr + 0.536_332_536_3 * lg + 0.051_445_992_9 * lb;
    let m = 0.211_903_498_2 * lr + 0.680_699_545_1 * lg + 0.107_396_956_6 * lb;
    let s = 0.088_302_461_9 * lr + 0.281_718_837_6 * lg + 0.629_978_700_5 * lb;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let lab_l = 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_;
    let lab_a = 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_;
    let lab_b = 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_;

    let chroma = lab_a.hypot(lab_b);
    let hue = if chroma < 1e-7 {
        0.0
    } else {
        lab_b.atan2(lab_a).to_degrees().rem_euclid(360.0)
    };

    (lab_l, chroma, hue)
}

/// OKLCh → sRGB, clamped to the sRGB gamut.
pub(crate) fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let hr = h.to_radians();
    let lab_a = c * hr.cos();
    let lab_b = c * hr.sin();

    let l_ = l + 0.396_337_777_4 * lab_a + 0.215_803_757_3 * lab_b;
    let m_ = l - 0.105_561_345_8 * lab_a - 0.063_854_172_8 * lab_b;
    let s_ = l - 0.089_484_177_5 * lab_a - 1.291_485_548_0 * lab_b;

    let ll = l_ * l_ * l_;
    let mm = m_ * m_ * m_;
    let ss = s_ * s_ * s_;

    let r = 4.076_741_662_1 * ll - 3.307_711_591_3 * mm + 0.230_969_929_2 * ss;
    let g = -1.268_438_004_6 * ll + 2.609_757_401_1 * mm - 0.341_319_396_5 * ss;
    let b = -0.004_196_086_3 * ll - 0.703_418_614_7 * mm + 1.707_614_701_0 * ss;

    (
        linear_to_srgb(r).clamp(0.0, 1.0),
        linear_to_srgb(g).clamp(0.0, 1.0),
        linear_to_srgb(b).clamp(0.0, 1.0),
    )
}
