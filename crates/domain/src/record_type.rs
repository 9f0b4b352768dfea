use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// DNS record type a query or rule modifier can refer to.
///
/// The evaluator only ever synthesizes `A`/`AAAA` answers itself, but a
/// `$dnstype=` modifier on an arbitrary rule line may name any of these, so
/// the full set round-trips through parsing even though most never reach a
/// filter decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,
    SRV,
    NS,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::NS => "NS",
        };
        f.write_str(s)
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "PTR" => Ok(RecordType::PTR),
            "SRV" => Ok(RecordType::SRV),
            "NS" => Ok(RecordType::NS),
            other => Err(format!("unknown record type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        for rt in [
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::TXT,
            RecordType::PTR,
            RecordType::SRV,
            RecordType::NS,
        ] {
            let s = rt.to_string();
            assert_eq!(s.parse::<RecordType>().unwrap(), rt);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!("AaAa".parse::<RecordType>().unwrap(), RecordType::AAAA);
    }

    #[test]
    fn from_str_rejects_unknown_types() {
        assert!("SOA".parse::<RecordType>().is_err());
    }
}
