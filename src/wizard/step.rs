//! Wizard step enumeration
//!
//! The seven ordered states of the donation flow as a tagged enum, so the
//! step index can never leave the valid range and transitions are explicit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One state of the donation wizard, in flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Landing screen introducing the program
    #[default]
    Welcome,
    /// Pick what is being donated
    TypeSelection,
    /// ZIP code and optional street address
    AddressInput,
    /// Drop-off vs pickup
    MethodSelection,
    /// Contact details, box choices, and estimated value
    DetailsAndValue,
    /// Optional operational contribution
    Contribution,
    /// Review and submit (terminal)
    Confirmation,
}

impl WizardStep {
    /// Number of steps in the flow
    pub const COUNT: usize = 7;

    /// All steps in flow order, for the progress indicator
    pub const ALL: [WizardStep; Self::COUNT] = [
        Self::Welcome,
        Self::TypeSelection,
        Self::AddressInput,
        Self::MethodSelection,
        Self::DetailsAndValue,
        Self::Contribution,
        Self::Confirmation,
    ];

    /// Zero-based position in the flow
    pub fn index(self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::TypeSelection => 1,
            Self::AddressInput => 2,
            Self::MethodSelection => 3,
            Self::DetailsAndValue => 4,
            Self::Contribution => 5,
            Self::Confirmation => 6,
        }
    }

    /// Step at a given position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The following step; `None` at the end of the flow
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step; `None` at the start of the flow
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether this is the final, submit-instead-of-advance step
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Donor-facing step title
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::TypeSelection => "Type Selection",
            Self::AddressInput => "Address Input",
            Self::MethodSelection => "Method Selection",
            Self::DetailsAndValue => "Details & Value",
            Self::Contribution => "Contribution",
            Self::Confirmation => "Confirmation",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_round_trip() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(WizardStep::COUNT), None);
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(WizardStep::Welcome.next(), Some(WizardStep::TypeSelection));
        assert_eq!(WizardStep::Confirmation.next(), None);
        assert_eq!(WizardStep::Welcome.prev(), None);
        assert_eq!(
            WizardStep::Confirmation.prev(),
            Some(WizardStep::Contribution)
        );
    }

    #[test]
    fn test_terminal_step() {
        assert!(WizardStep::Confirmation.is_terminal());
        assert!(WizardStep::ALL[..6].iter().all(|s| !s.is_terminal()));
    }

    #[test]
    fn test_default_is_welcome() {
        assert_eq!(WizardStep::default(), WizardStep::Welcome);
    }
}
