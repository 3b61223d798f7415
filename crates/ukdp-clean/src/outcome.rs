/// Why a normalizer produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentReason {
    /// The input was missing, empty, or a recognized placeholder token.
    Blank,
    /// The input carried data that did not parse or validate.
    Malformed,
}

/// Outcome of a field normalizer.
///
/// Normalizers never fail: bad input collapses to [`Cleaned::Absent`] with a
/// reason. Assemblers usually only care about [`Cleaned::into_option`]; the
/// reason exists so diagnostics and tests can tell a blank cell from a
/// malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleaned<T> {
    Value(T),
    Absent(AbsentReason),
}

impl<T> Cleaned<T> {
    pub fn blank() -> Self {
        Self::Absent(AbsentReason::Blank)
    }

    pub fn malformed() -> Self {
        Self::Absent(AbsentReason::Malformed)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    pub fn as_ref(&self) -> Cleaned<&T> {
        match self {
            Self::Value(value) => Cleaned::Value(value),
            Self::Absent(reason) => Cleaned::Absent(*reason),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Absent(AbsentReason::Blank))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Absent(AbsentReason::Malformed))
    }
}
