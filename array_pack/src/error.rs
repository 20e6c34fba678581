use pack_buffer::BufferError;
use pack_codecs::CodecError;
use pack_template::SyntaxError;
use thiserror::Error;

/// The kind of failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed unit in the template.
    TemplateSyntax,
    /// Letter no packer knows.
    UnsupportedDirective,
    /// Ran out of values.
    ArgumentConsumption,
    /// A value could not become a string, integer or float.
    TypeConversion,
    /// `X` reached past the start of the output.
    BufferRange,
    /// `U` was given something that is not a code point.
    CodepointRange,
    /// `P` / `p`.
    NotSupported,
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("{0} is not supported")]
    UnsupportedDirective(char),

    #[error("too few arguments")]
    TooFewArguments,

    #[error("{0}")]
    TypeConversion(String),

    #[error("{directive} outside of the string")]
    BufferRange {
        directive: char,
        #[source]
        source: BufferError,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl PackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::Syntax(_) => ErrorKind::TemplateSyntax,
            PackError::UnsupportedDirective(_) => ErrorKind::UnsupportedDirective,
            PackError::TooFewArguments => ErrorKind::ArgumentConsumption,
            PackError::TypeConversion(_) => ErrorKind::TypeConversion,
            PackError::BufferRange { .. } => ErrorKind::BufferRange,
            PackError::Codec(e) => match e {
                CodecError::CodepointOutOfRange(_) => ErrorKind::CodepointRange,
                CodecError::InvalidBitChar(_) | CodecError::InvalidHexChar(_) => {
                    ErrorKind::TypeConversion
                }
                CodecError::PointerUnsupported(_) => ErrorKind::NotSupported,
            },
        }
    }

    /// Name of the exception class a host runtime raises for this error.
    pub fn exception_class(&self) -> &'static str {
        match self.kind() {
            ErrorKind::TemplateSyntax
            | ErrorKind::UnsupportedDirective
            | ErrorKind::ArgumentConsumption
            | ErrorKind::BufferRange => "ArgumentError",
            ErrorKind::TypeConversion => "TypeError",
            ErrorKind::CodepointRange => "RangeError",
            ErrorKind::NotSupported => "NotImplementedError",
        }
    }
}
