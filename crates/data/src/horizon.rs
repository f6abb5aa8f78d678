/// A time horizon for percent-change values.
///
/// Short horizons ship with the primary record blob; long horizons live in a
/// separate blob fetched on first use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Horizon {
    M3,
    M6,
    Y1,
    Y3,
    Y5,
    Y10,
    Y15,
}

impl Horizon {
    pub const ALL: [Horizon; 7] = [
        Horizon::M3,
        Horizon::M6,
        Horizon::Y1,
        Horizon::Y3,
        Horizon::Y5,
        Horizon::Y10,
        Horizon::Y15,
    ];

    /// Short-key field name in the wire format.
    pub fn wire_field(self) -> &'static str {
        match self {
            Horizon::M3 => "p3m",
            Horizon::M6 => "p6m",
            Horizon::Y1 => "p1y",
            Horizon::Y3 => "p3y",
            Horizon::Y5 => "p5y",
            Horizon::Y10 => "p10y",
            Horizon::Y15 => "p15y",
        }
    }

    pub fn from_wire_field(field: &str) -> Option<Self> {
        Horizon::ALL.into_iter().find(|h| h.wire_field() == field)
    }

    /// True for horizons embedded in the primary record blob.
    pub fn is_embedded(self) -> bool {
        matches!(self, Horizon::M3 | Horizon::M6 | Horizon::Y1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::M3 => "3 Months",
            Horizon::M6 => "6 Months",
            Horizon::Y1 => "1 Year",
            Horizon::Y3 => "3 Years",
            Horizon::Y5 => "5 Years",
            Horizon::Y10 => "10 Years",
            Horizon::Y15 => "15 Years",
        }
    }
}

/// The value accessor currently driving color and statistics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Current price level in dollars.
    Price,
    /// Percent change over the given horizon.
    Change(Horizon),
}

impl Metric {
    pub fn label(self) -> String {
        match self {
            Metric::Price => "Current Price Level".to_string(),
            Metric::Change(h) => format!("{} Change", h.label()),
        }
    }
}
