use core::fmt;

/// Errors from resolving a member of the `Math` object by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MathError {
    /// No member with that name exists in this build.
    UnknownMember,
    /// The member is a constant and cannot be called.
    NotAFunction,
    /// The member is a function, not a constant.
    NotAConstant,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::UnknownMember => f.write_str("unknown Math member"),
            MathError::NotAFunction => f.write_str("Math member is not a function"),
            MathError::NotAConstant => f.write_str("Math member is not a constant"),
        }
    }
}
