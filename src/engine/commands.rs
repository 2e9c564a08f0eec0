//! Parameter identifiers and change notifications
//!
//! Maps host parameter symbols to the stage slot (and field) they drive.
//! All types here are `Send + 'static` so changes can cross threads.

use thiserror::Error;

use super::state::Slot;

/// Errors raised while interpreting a host notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The symbol does not affect the transfer function.
    #[error("not a transfer-function parameter: {0}")]
    UnknownParameter(String),
}

/// Which control of a stage a parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageField {
    Enabled,
    Gain,
    Frequency,
    /// Bandwidth for bands and shelves, resonance for the high/low-pass.
    Q,
}

/// A parameter the transfer function depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    /// A control of one stage.
    Stage { slot: Slot, field: StageField },
    /// Global enable switch.
    Enable,
    /// Host bypass flag.
    Bypass,
}

const fn stage(slot: Slot, field: StageField) -> ParamId {
    ParamId::Stage { slot, field }
}

/// Symbol table, in the order the host lists them.
static SYMBOLS: [(&str, ParamId); 32] = [
    ("sec1", stage(Slot::Band1, StageField::Enabled)),
    ("gain1", stage(Slot::Band1, StageField::Gain)),
    ("freq1", stage(Slot::Band1, StageField::Frequency)),
    ("q1", stage(Slot::Band1, StageField::Q)),
    ("sec2", stage(Slot::Band2, StageField::Enabled)),
    ("gain2", stage(Slot::Band2, StageField::Gain)),
    ("freq2", stage(Slot::Band2, StageField::Frequency)),
    ("q2", stage(Slot::Band2, StageField::Q)),
    ("sec3", stage(Slot::Band3, StageField::Enabled)),
    ("gain3", stage(Slot::Band3, StageField::Gain)),
    ("freq3", stage(Slot::Band3, StageField::Frequency)),
    ("q3", stage(Slot::Band3, StageField::Q)),
    ("sec4", stage(Slot::Band4, StageField::Enabled)),
    ("gain4", stage(Slot::Band4, StageField::Gain)),
    ("freq4", stage(Slot::Band4, StageField::Frequency)),
    ("q4", stage(Slot::Band4, StageField::Q)),
    ("HSsec", stage(Slot::HighShelf, StageField::Enabled)),
    ("HSgain", stage(Slot::HighShelf, StageField::Gain)),
    ("HSfreq", stage(Slot::HighShelf, StageField::Frequency)),
    ("HSq", stage(Slot::HighShelf, StageField::Q)),
    ("LSsec", stage(Slot::LowShelf, StageField::Enabled)),
    ("LSgain", stage(Slot::LowShelf, StageField::Gain)),
    ("LSfreq", stage(Slot::LowShelf, StageField::Frequency)),
    ("LSq", stage(Slot::LowShelf, StageField::Q)),
    ("HighPass", stage(Slot::HighPass, StageField::Enabled)),
    ("HPfreq", stage(Slot::HighPass, StageField::Frequency)),
    ("HPQ", stage(Slot::HighPass, StageField::Q)),
    ("LowPass", stage(Slot::LowPass, StageField::Enabled)),
    ("LPfreq", stage(Slot::LowPass, StageField::Frequency)),
    ("LPQ", stage(Slot::LowPass, StageField::Q)),
    ("enable", ParamId::Enable),
    (":bypass", ParamId::Bypass),
];

impl ParamId {
    /// Number of parameters that must be known before a response can be drawn.
    pub const COUNT: usize = 32;

    /// Parses a host symbol.
    pub fn from_symbol(symbol: &str) -> Result<Self, ParamError> {
        SYMBOLS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, id)| *id)
            .ok_or_else(|| ParamError::UnknownParameter(symbol.to_string()))
    }

    /// The host symbol of this parameter.
    pub fn symbol(self) -> &'static str {
        SYMBOLS
            .iter()
            .find(|(_, id)| *id == self)
            .map(|(s, _)| *s)
            // stage fields without a host control, e.g. high-pass gain
            .unwrap_or("")
    }

    /// Iterates over every required parameter.
    pub fn all() -> impl Iterator<Item = ParamId> {
        SYMBOLS.iter().map(|(_, id)| *id)
    }

    /// The stage slot this parameter drives, if any.
    pub fn slot(self) -> Option<Slot> {
        match self {
            Self::Stage { slot, .. } => Some(slot),
            Self::Enable | Self::Bypass => None,
        }
    }
}

impl std::str::FromStr for ParamId {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single parameter-change notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamChange {
    pub id: ParamId,
    pub value: f64,
}

impl ParamChange {
    pub fn new(id: ParamId, value: f64) -> Self {
        Self { id, value }
    }

    /// Parses the symbol of a host notification.
    pub fn parse(symbol: &str, value: f64) -> Result<Self, ParamError> {
        Ok(Self::new(ParamId::from_symbol(symbol)?, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::parameter;

    #[test]
    fn test_symbol_round_trip() {
        for id in ParamId::all() {
            assert_eq!(ParamId::from_symbol(id.symbol()), Ok(id));
        }
        assert_eq!(ParamId::all().count(), 32);
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            ParamId::from_symbol("gain"),
            Err(ParamError::UnknownParameter("gain".to_string()))
        );
        assert!("peakreset".parse::<ParamId>().is_err());
        assert!("Freq1".parse::<ParamId>().is_err());
    }

    #[test]
    fn test_stage_mapping() {
        assert_eq!(
            ParamId::from_symbol("q3"),
            Ok(ParamId::Stage { slot: Slot::Band3, field: StageField::Q })
        );
        assert_eq!(ParamId::from_symbol("LSgain").unwrap().slot(), Some(Slot::LowShelf));
        assert_eq!(ParamId::from_symbol("HSsec").unwrap().slot(), Some(Slot::HighShelf));
        assert_eq!(ParamId::from_symbol("HPQ").unwrap().slot(), Some(Slot::HighPass));
        assert_eq!(ParamId::from_symbol("LowPass").unwrap().slot(), Some(Slot::LowPass));
        assert_eq!(ParamId::from_symbol("enable").unwrap().slot(), None);
        assert_eq!(ParamId::from_symbol(":bypass").unwrap().slot(), None);
    }

    #[test]
    fn test_every_stage_has_required_fields() {
        for slot in Slot::ALL {
            let fields: Vec<StageField> = ParamId::all()
                .filter_map(|id| match id {
                    ParamId::Stage { slot: s, field } if s == slot => Some(field),
                    _ => None,
                })
                .collect();
            assert!(fields.contains(&StageField::Enabled));
            assert!(fields.contains(&StageField::Frequency));
            assert!(fields.contains(&StageField::Q));
            assert_eq!(fields.contains(&StageField::Gain), slot.kind().has_gain());
        }
    }

    #[test]
    fn test_every_id_has_definition() {
        for id in ParamId::all() {
            assert!(parameter::find(id.symbol()).is_some(), "{} has no definition", id);
        }
    }

    #[test]
    fn test_parse_change() {
        let change = ParamChange::parse("freq2", 440.0).unwrap();
        assert_eq!(change.id.slot(), Some(Slot::Band2));
        assert_eq!(change.value, 440.0);
        assert!(ParamChange::parse("nope", 1.0).is_err());
    }
}
