use crate::{Count, Endian, SyntaxError, Token};
use alloc::vec::Vec;
use core::iter::Peekable;
use core::str::Chars;

/// Directives that accept `_`, `!`, `<` and `>`.
const MODIFIABLE: &[char] = &['s', 'S', 'i', 'I', 'l', 'L', 'j', 'J'];

/// Largest count a unit may carry.
const MAX_COUNT: u64 = i32::MAX as u64;

fn is_modifier(c: char) -> bool {
    matches!(c, '_' | '!' | '<' | '>')
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Streaming tokenizer over a template string.
///
/// Yields one item per directive unit, in template order. The iterator
/// never stops early on a malformed unit: it yields the error and carries
/// on with the next unit.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(template: &'a str) -> Self {
        Tokenizer {
            chars: template.chars().peekable(),
        }
    }

    /// Skips whitespace and `#` comments.
    fn skip_insignificant(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if is_space(c) {
                self.chars.next();
            } else if c == '#' {
                for c in self.chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_if_modifier(&mut self) -> Option<char> {
        self.chars.next_if(|&c| is_modifier(c))
    }

    fn read_count(&mut self, directive: char) -> Result<Count, SyntaxError> {
        match self.chars.peek() {
            Some('*') => {
                self.chars.next();
                Ok(Count::Star)
            }
            Some(c) if c.is_ascii_digit() => {
                let mut value: u64 = 0;
                while let Some(digit) = self.chars.next_if(char::is_ascii_digit) {
                    let digit = u64::from(digit as u8 - b'0');
                    value = value.saturating_mul(10).saturating_add(digit);
                }
                if value > MAX_COUNT {
                    return Err(SyntaxError::CountTooLarge { directive });
                }
                Ok(Count::Exact(value as usize))
            }
            _ => Ok(Count::Unspecified),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_insignificant();
        let directive = self.chars.next()?;
        let mut token = Token::new(directive);

        // First error wins, but the whole unit is consumed regardless.
        let mut error = None;

        while let Some(modifier) = self.next_if_modifier() {
            if error.is_some() {
                continue;
            }
            if !MODIFIABLE.contains(&directive) {
                error = Some(SyntaxError::ModifierNotAllowed {
                    directive,
                    modifier,
                });
                continue;
            }
            match modifier {
                '<' | '>' => {
                    let endian = if modifier == '<' {
                        Endian::Little
                    } else {
                        Endian::Big
                    };
                    match token.modifiers.endian {
                        Some(previous) if previous != endian => {
                            error = Some(SyntaxError::ConflictingEndian { directive });
                        }
                        _ => token.modifiers.endian = Some(endian),
                    }
                }
                _ => token.modifiers.native_size = true,
            }
        }

        match self.read_count(directive) {
            Ok(count) => token.count = count,
            Err(e) => {
                error.get_or_insert(e);
            }
        }

        while let Some(modifier) = self.next_if_modifier() {
            error.get_or_insert(SyntaxError::MisplacedModifier {
                directive,
                modifier,
            });
        }

        Some(match error {
            Some(e) => Err(e),
            None => Ok(token),
        })
    }
}

/// Tokenizes a whole template.
pub fn tokenize(template: &str) -> Vec<Result<Token, SyntaxError>> {
    Tokenizer::new(template).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Modifiers;

    fn ok(template: &str) -> Vec<Token> {
        tokenize(template)
            .into_iter()
            .map(|t| t.expect("valid template"))
            .collect()
    }

    #[test]
    fn empty_template() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
    }

    #[test]
    fn counts_and_stars() {
        let tokens = ok("C c3 N* a10");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], Token::new('C'));
        assert_eq!(tokens[1], Token::new('c').with_count(Count::Exact(3)));
        assert_eq!(tokens[2], Token::new('N').with_count(Count::Star));
        assert_eq!(tokens[3], Token::new('a').with_count(Count::Exact(10)));
    }

    #[test]
    fn units_without_separators() {
        let directives: Vec<char> = ok("CCn2x").iter().map(|t| t.directive).collect();
        assert_eq!(directives, vec!['C', 'C', 'n', 'x']);
    }

    #[test]
    fn unknown_letters_are_kept() {
        let tokens = ok("Q2");
        assert_eq!(tokens[0], Token::new('Q').with_count(Count::Exact(2)));
    }

    #[test]
    fn comments_are_skipped() {
        let tokens = ok("C # header byte\nn # length");
        let directives: Vec<char> = tokens.iter().map(|t| t.directive).collect();
        assert_eq!(directives, vec!['C', 'n']);
    }

    #[test]
    fn modifiers() {
        let tokens = ok("s_ L> j<2 i!*");
        assert_eq!(
            tokens[0].modifiers,
            Modifiers {
                native_size: true,
                endian: None
            }
        );
        assert_eq!(tokens[1].modifiers.endian, Some(Endian::Big));
        assert_eq!(tokens[2].modifiers.endian, Some(Endian::Little));
        assert_eq!(tokens[2].count, Count::Exact(2));
        assert!(tokens[3].modifiers.native_size);
        assert_eq!(tokens[3].count, Count::Star);
    }

    #[test]
    fn modifier_on_wrong_directive() {
        let tokens = tokenize("C< n");
        assert_eq!(
            tokens[0],
            Err(SyntaxError::ModifierNotAllowed {
                directive: 'C',
                modifier: '<'
            })
        );
        assert_eq!(tokens[1], Ok(Token::new('n')));
    }

    #[test]
    fn conflicting_byte_order() {
        assert_eq!(
            tokenize("S<>"),
            vec![Err(SyntaxError::ConflictingEndian { directive: 'S' })]
        );
        // Repeating the same order is harmless.
        assert!(tokenize("S<<")[0].is_ok());
    }

    #[test]
    fn modifier_after_count() {
        assert_eq!(
            tokenize("s2_"),
            vec![Err(SyntaxError::MisplacedModifier {
                directive: 's',
                modifier: '_'
            })]
        );
    }

    #[test]
    fn count_too_large() {
        let tokens = tokenize("a99999999999 C");
        assert_eq!(tokens[0], Err(SyntaxError::CountTooLarge { directive: 'a' }));
        assert_eq!(tokens[1], Ok(Token::new('C')));

        assert_eq!(
            ok("a2147483647")[0].count,
            Count::Exact(2_147_483_647)
        );
    }
}
