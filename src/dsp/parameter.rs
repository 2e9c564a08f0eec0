//! Parameter definitions for the equalizer controls.
//!
//! Ranges and defaults of the host control inputs that affect the transfer
//! function. The ranges describe the host controls; the response math applies
//! its own clamps and does not limit values to these ranges.

/// How a parameter value should be displayed and interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterDisplay {
    /// Linear scaling with a unit suffix (e.g., "dB").
    Linear { unit: &'static str },
    /// Logarithmic scaling, used for frequency and bandwidth controls.
    Logarithmic { unit: &'static str },
    /// On/off toggle switch.
    Toggle,
}

impl ParameterDisplay {
    /// Returns the unit string, if applicable.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Linear { unit } | Self::Logarithmic { unit } => Some(*unit),
            Self::Toggle => None,
        }
    }
}

/// Definition of one host control input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterDefinition {
    /// Host symbol, e.g. `"freq1"`.
    pub symbol: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub display: ParameterDisplay,
}

impl ParameterDefinition {
    const fn new(
        symbol: &'static str,
        name: &'static str,
        min: f64,
        max: f64,
        default: f64,
        display: ParameterDisplay,
    ) -> Self {
        Self {
            symbol,
            name,
            min,
            max,
            default,
            display,
        }
    }

    const fn toggle(symbol: &'static str, name: &'static str, default: f64) -> Self {
        Self::new(symbol, name, 0.0, 1.0, default, ParameterDisplay::Toggle)
    }

    const fn frequency(symbol: &'static str, name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self::new(symbol, name, min, max, default, ParameterDisplay::Logarithmic { unit: "Hz" })
    }

    const fn gain(symbol: &'static str, name: &'static str) -> Self {
        Self::new(symbol, name, -18.0, 18.0, 0.0, ParameterDisplay::Linear { unit: "dB" })
    }

    const fn bandwidth(symbol: &'static str, name: &'static str, default: f64) -> Self {
        Self::new(symbol, name, 0.0625, 4.0, default, ParameterDisplay::Logarithmic { unit: "oct" })
    }

    const fn resonance(symbol: &'static str, name: &'static str, default: f64) -> Self {
        Self::new(symbol, name, 0.0, 1.4, default, ParameterDisplay::Linear { unit: "" })
    }
}

/// Every control input that affects the transfer function, in host port order.
pub static PARAMETERS: [ParameterDefinition; 32] = [
    ParameterDefinition::toggle("enable", "Enable", 1.0),
    ParameterDefinition::toggle("HighPass", "Highpass", 0.0),
    ParameterDefinition::frequency("HPfreq", "Highpass Frequency", 5.0, 1250.0, 20.0),
    ParameterDefinition::resonance("HPQ", "Highpass Resonance", 0.7),
    ParameterDefinition::toggle("LowPass", "Lowpass", 0.0),
    ParameterDefinition::frequency("LPfreq", "Lowpass Frequency", 500.0, 20000.0, 20000.0),
    ParameterDefinition::resonance("LPQ", "Lowpass Resonance", 1.0),
    ParameterDefinition::toggle("LSsec", "Lowshelf", 1.0),
    ParameterDefinition::frequency("LSfreq", "Lowshelf Frequency", 25.0, 400.0, 80.0),
    ParameterDefinition::bandwidth("LSq", "Lowshelf Bandwidth", 1.0),
    ParameterDefinition::gain("LSgain", "Lowshelf Gain"),
    ParameterDefinition::toggle("sec1", "Section 1", 1.0),
    ParameterDefinition::frequency("freq1", "Frequency 1", 20.0, 2000.0, 160.0),
    ParameterDefinition::bandwidth("q1", "Bandwidth 1", 0.5),
    ParameterDefinition::gain("gain1", "Gain 1"),
    ParameterDefinition::toggle("sec2", "Section 2", 1.0),
    ParameterDefinition::frequency("freq2", "Frequency 2", 40.0, 4000.0, 397.0),
    ParameterDefinition::bandwidth("q2", "Bandwidth 2", 0.5),
    ParameterDefinition::gain("gain2", "Gain 2"),
    ParameterDefinition::toggle("sec3", "Section 3", 1.0),
    ParameterDefinition::frequency("freq3", "Frequency 3", 100.0, 10000.0, 1250.0),
    ParameterDefinition::bandwidth("q3", "Bandwidth 3", 0.5),
    ParameterDefinition::gain("gain3", "Gain 3"),
    ParameterDefinition::toggle("sec4", "Section 4", 1.0),
    ParameterDefinition::frequency("freq4", "Frequency 4", 200.0, 20000.0, 2500.0),
    ParameterDefinition::bandwidth("q4", "Bandwidth 4", 0.5),
    ParameterDefinition::gain("gain4", "Gain 4"),
    ParameterDefinition::toggle("HSsec", "Highshelf", 1.0),
    ParameterDefinition::frequency("HSfreq", "Highshelf Frequency", 1000.0, 16000.0, 8000.0),
    ParameterDefinition::bandwidth("HSq", "Highshelf Bandwidth", 1.0),
    ParameterDefinition::gain("HSgain", "Highshelf Gain"),
    ParameterDefinition::toggle(":bypass", "Bypass", 0.0),
];

/// Looks up a parameter definition by host symbol.
pub fn find(symbol: &str) -> Option<&'static ParameterDefinition> {
    PARAMETERS.iter().find(|p| p.symbol == symbol)
}
