//! Core types for circuit representation.

use std::fmt;

/// The four electrical quantities tracked per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Voltage in volts
    Voltage,
    /// Current in amperes
    Current,
    /// Resistance in ohms
    Resistance,
    /// Power in watts
    Power,
}

impl Quantity {
    /// All quantities, in the order derivations are attempted.
    pub const ALL: [Quantity; 4] = [
        Quantity::Voltage,
        Quantity::Current,
        Quantity::Resistance,
        Quantity::Power,
    ];

    /// The single-letter symbol used in sheets and tables.
    pub fn symbol(&self) -> char {
        match self {
            Quantity::Voltage => 'V',
            Quantity::Current => 'I',
            Quantity::Resistance => 'R',
            Quantity::Power => 'P',
        }
    }

    /// The SI unit abbreviation, for human-readable messages.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Voltage => "V",
            Quantity::Current => "A",
            Quantity::Resistance => "ohm",
            Quantity::Power => "W",
        }
    }

    /// Parse a quantity from its sheet symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'V' => Some(Quantity::Voltage),
            'I' => Some(Quantity::Current),
            'R' => Some(Quantity::Resistance),
            'P' => Some(Quantity::Power),
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Voltage => "voltage",
            Quantity::Current => "current",
            Quantity::Resistance => "resistance",
            Quantity::Power => "power",
        };
        write!(f, "{}", name)
    }
}

/// The four optional values of one element or of the circuit totals.
///
/// `None` means "unknown". The solver only ever fills unknowns; a value
/// that is `Some` at input time is never rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quantities {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub power: Option<f64>,
}

impl Quantities {
    /// An all-unknown record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read a field by quantity.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Power => self.power,
        }
    }

    /// Write a field by quantity.
    pub fn set(&mut self, quantity: Quantity, value: f64) {
        match quantity {
            Quantity::Voltage => self.voltage = Some(value),
            Quantity::Current => self.current = Some(value),
            Quantity::Resistance => self.resistance = Some(value),
            Quantity::Power => self.power = Some(value),
        }
    }

    /// Number of known fields (0 to 4).
    pub fn known_count(&self) -> usize {
        Quantity::ALL
            .iter()
            .filter(|q| self.get(**q).is_some())
            .count()
    }

    /// True if no field is known.
    pub fn is_empty(&self) -> bool {
        self.known_count() == 0
    }
}

/// User-supplied circuit-wide knowns.
///
/// Structurally identical to a component's value record. The solver
/// tolerates any number of populated fields, not just the two the
/// reference UI allows.
pub type Totals = Quantities;

/// A unique identifier for a component within a list.
///
/// Stable display identity only; carries no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// One two-terminal element of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub values: Quantities,
}

impl Component {
    /// Create a component with all four values unknown.
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            values: Quantities::empty(),
        }
    }

    /// Create a component with the given values.
    pub fn with_values(id: ComponentId, values: Quantities) -> Self {
        Self { id, values }
    }
}

/// Which calculator the input drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One element solved in isolation, no network constraint
    Basic,
    /// End-to-end connection: current is common, voltages add
    Series,
    /// Common-node connection: voltage is common, currents add
    Parallel,
}

impl Mode {
    /// The quantity the topology forces to be equal across all
    /// components, if any.
    pub fn shared_quantity(&self) -> Option<Quantity> {
        match self {
            Mode::Basic => None,
            Mode::Series => Some(Quantity::Current),
            Mode::Parallel => Some(Quantity::Voltage),
        }
    }

    /// Parse a mode from its sheet directive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "basic" => Some(Mode::Basic),
            "series" => Some(Mode::Series),
            "parallel" => Some(Mode::Parallel),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Basic => "basic",
            Mode::Series => "series",
            Mode::Parallel => "parallel",
        };
        write!(f, "{}", name)
    }
}
