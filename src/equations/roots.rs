//! Defines the [`Roots`] enum returned by all solvers and the
//! [`RootCount`] it summarizes to.


/// How many real roots an equation has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootCount {
    Zero,
    One,
    Two,
    Infinite,
}


/// Real roots of a linear or quadratic equation.
///
/// Variants:
/// ├ [`Roots::Zero`]     : no real root
/// ├ [`Roots::One`]      : single root (linear case, or zero discriminant)
/// ├ [`Roots::Two`]      : two distinct roots, larger first
/// └ [`Roots::Infinite`] : every real number is a root (`0 = 0`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    Zero,
    One(f64),
    Two(f64, f64),
    Infinite,
}

/// # Accessors
///
/// ├ [`Roots::count()`]    : [`RootCount`]
/// ├ [`Roots::first()`]    : `Option<f64>`, the larger root for [`Roots::Two`]
/// ├ [`Roots::second()`]   : `Option<f64>`, only for [`Roots::Two`]
/// └ [`Roots::as_vec()`]   : finite root values in order
impl Roots {
    pub fn count(&self) -> RootCount {
        match self {
            Roots::Zero      => RootCount::Zero,
            Roots::One(_)    => RootCount::One,
            Roots::Two(..)   => RootCount::Two,
            Roots::Infinite  => RootCount::Infinite,
        }
    }

    pub fn first(&self) -> Option<f64> {
        match self {
            Roots::One(x) | Roots::Two(x, _) => Some(*x),
            Roots::Zero | Roots::Infinite    => None,
        }
    }

    pub fn second(&self) -> Option<f64> {
        match self {
            Roots::Two(_, x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_vec(&self) -> Vec<f64> {
        match self {
            Roots::One(x)      => vec![*x],
            Roots::Two(x1, x2) => vec![*x1, *x2],
            Roots::Zero | Roots::Infinite => Vec::new(),
        }
    }

    /// Bitwise comparison: roots match only if their `f64` bits match.
    /// Used by the self-test table, where `-0.0 != 0.0`.
    pub fn bits_eq(&self, other: &Roots) -> bool {
        match (self, other) {
            (Roots::Zero, Roots::Zero) | (Roots::Infinite, Roots::Infinite) => true,
            (Roots::One(x), Roots::One(y)) => x.to_bits() == y.to_bits(),
            (Roots::Two(x1, x2), Roots::Two(y1, y2)) => {
                x1.to_bits() == y1.to_bits() && x2.to_bits() == y2.to_bits()
            }
            _ => false,
        }
    }
}
