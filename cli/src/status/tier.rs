use std::fmt;

/// Charge level classification used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Warn,
    Middle,
    Good,
}

impl Tier {
    /// Both bounds are inclusive, so ties resolve to the higher tier.
    pub fn classify(percentage: u32, lower: u32, upper: u32) -> Self {
        if percentage >= upper {
            Tier::Good
        } else if percentage >= lower {
            Tier::Middle
        } else {
            Tier::Warn
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Middle => "middle",
            Tier::Warn => "warn",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::classify(75, 25, 75), Tier::Good);
        assert_eq!(Tier::classify(74, 25, 75), Tier::Middle);
        assert_eq!(Tier::classify(25, 25, 75), Tier::Middle);
        assert_eq!(Tier::classify(24, 25, 75), Tier::Warn);
        assert_eq!(Tier::classify(0, 25, 75), Tier::Warn);
        assert_eq!(Tier::classify(100, 25, 75), Tier::Good);
    }

    #[test]
    fn test_monotonic() {
        for (lower, upper) in [(25, 75), (10, 11), (0, 100), (50, 50)] {
            let mut previous = Tier::Warn;
            for percentage in 0..=100 {
                let tier = Tier::classify(percentage, lower, upper);
                assert!(
                    tier >= previous,
                    "{percentage}% dropped from {previous} to {tier} with {lower}/{upper}"
                );
                previous = tier;
            }
        }
    }

    #[test]
    fn test_equal_thresholds_skip_middle() {
        assert_eq!(Tier::classify(50, 50, 50), Tier::Good);
        assert_eq!(Tier::classify(49, 50, 50), Tier::Warn);
    }
}
