use crate::config::TimerConfig;

/// Visual urgency of the countdown, derived from the time left on the current slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tier {
    Normal,   // More than the warning threshold left
    Warning,  // At or below the warning threshold
    Critical, // At or below the critical threshold
}

impl Tier {
    pub fn from_remaining(remaining: f32, config: &TimerConfig) -> Self {
        if remaining > config.warning() {
            Tier::Normal
        } else if remaining > config.critical() {
            Tier::Warning
        } else {
            Tier::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TimerConfig {
        TimerConfig::new(60.0, 20.0, 5.0).unwrap()
    }

    #[test]
    fn above_warning_is_normal() {
        let config = config();
        assert_eq!(Tier::from_remaining(60.0, &config), Tier::Normal);
        assert_eq!(Tier::from_remaining(20.01, &config), Tier::Normal);
    }

    #[test]
    fn warning_band_includes_its_upper_bound() {
        let config = config();
        assert_eq!(Tier::from_remaining(20.0, &config), Tier::Warning);
        assert_eq!(Tier::from_remaining(12.5, &config), Tier::Warning);
        assert_eq!(Tier::from_remaining(5.01, &config), Tier::Warning);
    }

    #[test]
    fn critical_band_includes_threshold_and_below() {
        let config = config();
        assert_eq!(Tier::from_remaining(5.0, &config), Tier::Critical);
        assert_eq!(Tier::from_remaining(0.3, &config), Tier::Critical);
        assert_eq!(Tier::from_remaining(0.0, &config), Tier::Critical);
    }
}
