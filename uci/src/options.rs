#[derive(Debug, Clone)]
pub struct UciOption {
    pub name: &'static str,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone)]
pub enum UciOptionType {
    Spin { min: i32, max: i32 },
}

impl UciOptionType {
    /// Checks a `setoption` value against the option's declared range.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        match self {
            UciOptionType::Spin { min, max } => {
                let parsed = value
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid integer '{}': {}", value, e))?;
                if parsed < i64::from(*min) || parsed > i64::from(*max) {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
        }
    }

    pub fn to_uci<T: ToString>(&self, name: &str, default: &T) -> String {
        match self {
            UciOptionType::Spin { min, max } => format!(
                "option name {} type spin default {} min {} max {}",
                name,
                default.to_string(),
                min,
                max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_validation() {
        let spin = UciOptionType::Spin { min: 1, max: 8 };
        assert!(spin.validate("1").is_ok());
        assert!(spin.validate(" 8 ").is_ok());
        assert!(spin.validate("0").is_err());
        assert!(spin.validate("99999999999").is_err());
        assert!(spin.validate("three").is_err());
    }

    #[test]
    fn test_spin_declaration() {
        let spin = UciOptionType::Spin { min: 1, max: 8 };
        assert_eq!(
            spin.to_uci("Depth", &3u8),
            "option name Depth type spin default 3 min 1 max 8"
        );
    }
}
