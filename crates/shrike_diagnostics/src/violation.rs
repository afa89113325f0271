use std::fmt;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FixAvailability {
    Sometimes,
    Always,
    #[default]
    None,
}

impl fmt::Display for FixAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixAvailability::Sometimes => write!(f, "Fix is sometimes available."),
            FixAvailability::Always => write!(f, "Fix is always available."),
            FixAvailability::None => write!(f, "Fix is not available."),
        }
    }
}

/// A lint violation that can be attached to a [`Diagnostic`](crate::Diagnostic).
pub trait Violation {
    /// Whether the violation's fix is always, sometimes, or never available.
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::None;

    /// The name of the rule the violation belongs to.
    fn rule_name(&self) -> &'static str;

    /// The message used to describe the violation.
    fn message(&self) -> String;

    /// The title displayed for the available fix, if any.
    fn fix_title(&self) -> Option<String> {
        None
    }
}

/// A [`Violation`] whose fix is always available.
pub trait AlwaysFixableViolation {
    /// The name of the rule the violation belongs to.
    fn rule_name(&self) -> &'static str;

    /// The message used to describe the violation.
    fn message(&self) -> String;

    /// The title displayed for the fix.
    fn fix_title(&self) -> String;
}

impl<V: AlwaysFixableViolation> Violation for V {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

    fn rule_name(&self) -> &'static str {
        AlwaysFixableViolation::rule_name(self)
    }

    fn message(&self) -> String {
        AlwaysFixableViolation::message(self)
    }

    fn fix_title(&self) -> Option<String> {
        Some(AlwaysFixableViolation::fix_title(self))
    }
}
