use crate::errors::RefiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lending protocols that balances can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Aave,
}

impl Protocol {
    pub fn id(&self) -> u8 {
        match self {
            Protocol::Aave => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Aave => "aave",
        }
    }

    pub fn all() -> &'static [Protocol] {
        &[Protocol::Aave]
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for Protocol {
    type Error = RefiError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Protocol::all()
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or(RefiError::UnsupportedProtocol {
                protocol: id.to_string(),
            })
    }
}

/// Unsigned decimal without leading zeros, so "0" but not "00" or "+0"
fn is_plain_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

impl FromStr for Protocol {
    type Err = RefiError;

    /// Accepts either the protocol name or its numeric id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_plain_id(trimmed) {
            if let Ok(id) = trimmed.parse::<u8>() {
                return Protocol::try_from(id);
            }
        }
        Protocol::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RefiError::UnsupportedProtocol {
                protocol: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UNSUPPORTED_PROTOCOL_REASON;

    #[test]
    fn test_parse_protocol_by_name() {
        assert_eq!("aave".parse::<Protocol>().unwrap(), Protocol::Aave);
        assert_eq!("AAVE".parse::<Protocol>().unwrap(), Protocol::Aave);
        assert_eq!(" Aave ".parse::<Protocol>().unwrap(), Protocol::Aave);
    }

    #[test]
    fn test_parse_protocol_by_id() {
        assert_eq!("0".parse::<Protocol>().unwrap(), Protocol::Aave);
        assert_eq!(Protocol::try_from(0u8).unwrap(), Protocol::Aave);
    }

    #[test]
    fn test_unknown_protocol_is_rejected() {
        for input in ["compound", "1", "255", "256", ""] {
            let err = input.parse::<Protocol>().unwrap_err();
            assert!(matches!(err, RefiError::UnsupportedProtocol { .. }));
            assert_eq!(err.to_string(), UNSUPPORTED_PROTOCOL_REASON);
        }
    }

    #[test]
    fn test_only_plain_ids_are_accepted() {
        for input in ["+0", "-0", "00", "000", "01", "0x0"] {
            let err = input.parse::<Protocol>().unwrap_err();
            assert!(matches!(err, RefiError::UnsupportedProtocol { .. }), "{}", input);
        }
    }

    #[test]
    fn test_protocol_display_round_trip() {
        for protocol in Protocol::all() {
            assert_eq!(protocol.to_string().parse::<Protocol>().unwrap(), *protocol);
        }
    }
}
