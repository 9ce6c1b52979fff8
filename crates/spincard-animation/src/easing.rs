/// Easing curves matching the Compose constants of the same names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    /// Material standard curve, the default for tweens.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearInEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluates the CSS-style cubic bezier `(0,0) (x1,y1) (x2,y2) (1,1)` at
/// horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let polynomial = |p1: f32, p2: f32| {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    };
    let (ax, bx, cx) = polynomial(x1, x2);
    let (ay, by, cy) = polynomial(y1, y2);
    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |t: f32| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson first, bisection when the slope is too flat.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let derivative = slope(t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..24 {
            let error = sample(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    sample(ay, by, cy, t)
}
