/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

/// How many times, or over how much input, a directive applies.
///
/// A unit carries either nothing, a decimal count or a star, never two of
/// them at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Count {
    #[default]
    Unspecified,
    Exact(usize),
    /// `*`: cover everything that remains.
    Star,
}

impl Count {
    /// The explicit count, if one was written.
    pub fn exact(self) -> Option<usize> {
        match self {
            Count::Exact(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_star(self) -> bool {
        self == Count::Star
    }

    /// The explicit count, or `default` for both an unspecified count and
    /// a star.
    pub fn or(self, default: usize) -> usize {
        self.exact().unwrap_or(default)
    }
}

/// Size and byte order modifiers (`_`, `!`, `<`, `>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// `_` or `!`: use the platform's native size for the type.
    pub native_size: bool,
    /// `<` or `>`: force the byte order.
    pub endian: Option<Endian>,
}

/// One parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The directive letter, stored as written even if no packer
    /// recognizes it.
    pub directive: char,
    pub count: Count,
    pub modifiers: Modifiers,
}

impl Token {
    pub fn new(directive: char) -> Self {
        Token {
            directive,
            count: Count::Unspecified,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_count(mut self, count: Count) -> Self {
        self.count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults() {
        assert_eq!(Count::Unspecified.or(1), 1);
        assert_eq!(Count::Star.or(1), 1);
        assert_eq!(Count::Exact(0).or(1), 0);
        assert!(Count::Star.is_star());
        assert_eq!(Count::Star.exact(), None);
    }
}
