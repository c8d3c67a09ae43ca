quantity!(Megawatts, "MW");

impl Megawatts {
    /// Round to the nearest tenth of a megawatt, the granularity of dispatch instructions.
    pub fn round_to_tenth(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }

    /// Round down to a tenth of a megawatt, so that the result never exceeds the original value.
    ///
    /// Values that are a tenth already stay intact despite the representation error.
    pub fn floor_to_tenth(self) -> Self {
        Self((self.0 * 10.0 + 1e-9).floor() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(Megawatts(480.04).round_to_tenth(), Megawatts(480.0));
        assert_eq!(Megawatts(480.06).round_to_tenth(), Megawatts(480.1));
        assert_eq!(Megawatts(-0.06).round_to_tenth(), Megawatts(-0.1));
    }

    #[test]
    fn test_floor_to_tenth() {
        assert_eq!(Megawatts(100.06).floor_to_tenth(), Megawatts(100.0));
        assert_eq!(Megawatts(18.11).floor_to_tenth(), Megawatts(18.1));
        assert_eq!(Megawatts(0.7).floor_to_tenth(), Megawatts(0.7));
        assert_eq!(Megawatts(36.0 * 60.0 / 100.0).floor_to_tenth(), Megawatts(21.6));
    }

    /// Accumulated float error must not survive the rounding.
    #[test]
    fn test_round_to_tenth_sum() {
        let sum: Megawatts = [Megawatts(0.1), Megawatts(0.2)].into_iter().sum();
        assert_ne!(sum, Megawatts(0.3));
        assert_eq!(sum.round_to_tenth(), Megawatts(0.3));
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(-Megawatts::ZERO, Megawatts::ZERO);
        assert!(Megawatts(-0.0) <= Megawatts::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Megawatts(90.5).to_string(), "90.5 MW");
        assert_eq!(format!("{:?}", Megawatts(90.5)), "90.5MW");
    }
}
