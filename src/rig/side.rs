/// Left/right tag carried alongside side-agnostic base names.
///
/// Suffix composition happens only at the naming boundary; all chain, split
/// and merge logic works on `(base, Side)` pairs instead of string surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn suffix(self) -> &'static str {
        match self {
            Side::Left => ".L",
            Side::Right => ".R",
        }
    }

    /// `"forearm"` → `"forearm.L"`.
    pub fn apply(self, base: &str) -> String {
        format!("{base}{}", self.suffix())
    }

    /// Mirrored pole angles: left chains keep the table angle, right chains
    /// negate it.
    pub fn pole_sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Insert an infix before the side suffix: `("forearm", ".fk", Left)` →
/// `"forearm.fk.L"`.
pub fn with_infix(base: &str, infix: &str, side: Side) -> String {
    format!("{base}{infix}{}", side.suffix())
}

/// FK/IK sibling of an already side-suffixed bone name, or `None` when the
/// name carries no side suffix (center bones have no FK/IK siblings).
pub fn sibling_of(name: &str, infix: &str) -> Option<String> {
    for side in Side::BOTH {
        if let Some(base) = name.strip_suffix(side.suffix()) {
            return Some(with_infix(base, infix, side));
        }
    }
    None
}

/// Where the 2-digit piece number lands relative to the side suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// `DEF-forearm.01.L`
    BeforeSide,
    /// `DEF-forearm.L.01`
    AfterSide,
}

/// Compose a split-piece name from prefix, base, piece number and side.
pub fn piece_name(prefix: &str, base: &str, piece: usize, style: NumberStyle, side: Side) -> String {
    match style {
        NumberStyle::BeforeSide => format!("{prefix}{base}.{piece:02}{}", side.suffix()),
        NumberStyle::AfterSide => format!("{prefix}{base}{}.{piece:02}", side.suffix()),
    }
}
