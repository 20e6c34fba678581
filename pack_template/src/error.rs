#[cfg(feature = "std")]
use thiserror::Error;

/// A malformed unit in a template.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[cfg_attr(feature = "std", error("'{modifier}' allowed only after types sSiIlLjJ"))]
    ModifierNotAllowed { directive: char, modifier: char },

    #[cfg_attr(feature = "std", error("Can't use both '<' and '>'"))]
    ConflictingEndian { directive: char },

    #[cfg_attr(
        feature = "std",
        error("'{modifier}' must directly follow the directive '{directive}'")
    )]
    MisplacedModifier { directive: char, modifier: char },

    #[cfg_attr(feature = "std", error("pack length too big"))]
    CountTooLarge { directive: char },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SyntaxError::ModifierNotAllowed { modifier, .. } => {
                write!(f, "'{}' allowed only after types sSiIlLjJ", modifier)
            }
            SyntaxError::ConflictingEndian { .. } => write!(f, "Can't use both '<' and '>'"),
            SyntaxError::MisplacedModifier {
                directive,
                modifier,
            } => write!(
                f,
                "'{}' must directly follow the directive '{}'",
                modifier, directive
            ),
            SyntaxError::CountTooLarge { .. } => write!(f, "pack length too big"),
        }
    }
}
