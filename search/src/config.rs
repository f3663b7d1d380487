use std::str::FromStr;
use std::sync::mpsc::{SendError, Sender};

use uci::{UciOption, UciOptionType, UciOutput};

use crate::{MAX_DEPTH, MIN_DEPTH};

fn uci(include: bool, name: &'static str, option_type: UciOptionType) -> Option<UciOption> {
    include.then_some(UciOption { name, option_type })
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:expr, $uci_type:expr, $default:expr, $include:expr)),* $(,)?) => {
        /// Engine settings, each optionally exposed as a UCI option.
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: uci($include, $uci_name, $uci_type),
                    },)*
                }
            }
        }

        impl EngineConfig {
            /// Applies a `setoption`. Option names are matched case-insensitively.
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                $(
                    if $include && uci_name.eq_ignore_ascii_case($uci_name) {
                        return self.$field.update_from_uci(value);
                    }
                )*
                Err(format!("Unknown parameter: {}", uci_name))
            }

            /// Announces every exposed option, as sent in reply to `uci`.
            pub fn to_uci(&self, output: &Sender<UciOutput>) -> Result<(), SendError<UciOutput>> {
                $(
                    if let Some(declaration) = self.$field.to_uci() {
                        output.send(UciOutput::Option(declaration))?;
                    }
                )*
                Ok(())
            }
        }
    };
}

define_config!(
    // Plies searched per move
    (depth: u8, "Depth", UciOptionType::Spin { min: MIN_DEPTH as i32, max: MAX_DEPTH as i32 }, 3, true),
    // Root shuffle seed, 0 draws a fresh one from the OS
    (seed: u64, "Seed", UciOptionType::Spin { min: 0, max: i32::MAX }, 0, true),
);

impl EngineConfig {
    /// The configured seed, or `None` when the shuffle should use entropy.
    pub fn seed(&self) -> Option<u64> {
        match self.seed.value {
            0 => None,
            seed => Some(seed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: Option<UciOption>,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        if let Some(uci_meta) = &self.uci {
            uci_meta.option_type.validate(value)?;
        }

        self.value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(())
    }

    /// The `option ...` line for this parameter, if it is exposed over UCI.
    pub fn to_uci(&self) -> Option<String> {
        self.uci
            .as_ref()
            .map(|meta| meta.option_type.to_uci(meta.name, &self.value))
    }
}
