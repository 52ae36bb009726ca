//! Roll conventions for dates that fall on a holiday.

/// How to move a date off a holiday.
///
/// Only [`Following`](RollType::Following) and
/// [`Preceding`](RollType::Preceding) are implemented by
/// [`roll`](crate::roller::roll); the other variants are accepted in
/// configuration but fail with `Error::NotImplemented` when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollType {
    /// No roll convention configured.
    None,
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Following, unless that crosses into the next month.
    ModifiedFollowing,
    /// Preceding, unless that crosses into the previous month.
    ModifiedPreceding,
}

impl std::fmt::Display for RollType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RollType::None => "None",
            RollType::Following => "Following",
            RollType::Preceding => "Preceding",
            RollType::ModifiedFollowing => "Modified Following",
            RollType::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{s}")
    }
}
