//! Human-readable rendering of [`Roots`].

use crate::equations::Roots;

/// Significant digits used for printed roots.
pub const PRECISION: usize = 4;


/// Renders one line describing `roots`.
pub fn render(roots: &Roots) -> String {
    match *roots {
        Roots::Zero        => "No roots were found.".to_owned(),
        Roots::One(x)      => format!("One root was found. x = {}.", format_g(x, PRECISION)),
        Roots::Two(x1, x2) => format!(
            "Two roots were found. x1 = {}, x2 = {}.",
            format_g(x1, PRECISION),
            format_g(x2, PRECISION)
        ),
        Roots::Infinite    => "There are an infinite number of roots.".to_owned(),
    }
}


/// Formats `x` with `precision` significant digits, `%g` style:
/// fixed notation for exponents in `[-4, precision)`, scientific otherwise,
/// trailing zeros dropped.
pub fn format_g(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0".to_owned() } else { "0".to_owned() };
    }

    let p = precision.max(1);
    // rounding first settles the exponent (9.9995 -> 1.000e1)
    let sci = format!("{:.*e}", p - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else { return sci; };
    let Ok(exp) = exp.parse::<i32>() else { return sci; };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
