use thiserror::Error;

/// Errors raised while turning text into a [`Pernr`](crate::Pernr).
///
/// A number with a bad check digit is *not* an error; see
/// [`Pernr::is_valid`](crate::Pernr::is_valid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `[CC]YYMMDD[-+]NNNN` shaped substring was found.
    #[error("could not parse identity number: {input}")]
    Malformed { input: String },

    /// Month above 12 or day above 31.
    #[error("invalid birth date: {date}")]
    InvalidBirthDate { date: String },
}
