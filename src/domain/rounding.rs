//! Explicit rounding direction for integer division.

/// Specifies the rounding direction for division on domain quantities.
///
/// All division in the engine requires an explicit `Rounding` parameter
/// so the direction of every unit of dust is a deliberate choice, never
/// an accident of integer truncation.
///
/// # Examples
///
/// ```
/// use cpamm::domain::Rounding;
///
/// let r = Rounding::Down;
/// assert!(r.is_down());
/// assert!(!r.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Up.is_down());
    }

    #[test]
    fn down_is_down() {
        assert!(Rounding::Down.is_down());
        assert!(!Rounding::Down.is_up());
    }

    #[test]
    fn equality() {
        assert_eq!(Rounding::Up, Rounding::Up);
        assert_ne!(Rounding::Up, Rounding::Down);
    }

    #[test]
    fn copy_semantics() {
        let a = Rounding::Down;
        let b = a;
        assert_eq!(a, b);
    }
}
