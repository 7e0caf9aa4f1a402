use super::State;
use thiserror::Error;

/// Number of transition entries: one per neighbourhood sum 0..=6
pub const TABLE_LEN: usize = 7;

/// Largest rule code representable with seven base-3 digits (3^7 - 1)
pub const MAX_RULE: u16 = 2186;

/// Errors raised while decoding a rule code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule code {0} is outside 0..=2186")]
    InvalidRule(i64),
}

/// Transition table of a three-state totalistic rule.
/// Entry `i` is the next status of a cell whose neighbourhood sums to `i`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct RuleTable {
    code: u16,
    entries: [State; TABLE_LEN],
}

impl RuleTable {
    /// Decode a rule code as seven base-3 digits, least significant first
    pub fn decode(code: i64) -> Result<Self, RuleError> {
        let valid = u16::try_from(code)
            .ok()
            .filter(|&c| c <= MAX_RULE)
            .ok_or(RuleError::InvalidRule(code))?;
        Ok(Self::from_code(valid))
    }

    fn from_code(valid: u16) -> Self {
        let mut entries = [State::Empty; TABLE_LEN];
        let mut rest = valid;
        for entry in &mut entries {
            // rest % 3 is always a valid digit
            *entry = State::from_digit((rest % 3) as u8).unwrap_or_default();
            rest /= 3;
        }

        log::trace!("rule #{valid} decoded to {entries:?}");
        Self { code: valid, entries }
    }

    /// The rule code this table was decoded from
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// All entries, indexed by neighbourhood sum
    pub const fn entries(&self) -> &[State; TABLE_LEN] {
        &self.entries
    }

    /// Apply rule to compute the next status for a neighbourhood sum
    pub fn next(&self, local_sum: u8) -> State {
        self.entries[usize::from(local_sum)]
    }
}

/// Get default rule code
pub const fn default_rule() -> u16 {
    777
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_code(default_rule())
    }
}
