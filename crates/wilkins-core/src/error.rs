use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("severity {0} is outside range [0, 4]")]
    SeverityOutOfRange(u8),

    #[error("color family index {0} is out of range")]
    FamilyOutOfRange(usize),

    #[error("saturation level index {0} is out of range")]
    SaturationOutOfRange(usize),

    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown pattern glare symptom: {0}")]
    UnknownPatternSymptom(String),

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("{0} reading samples exceed the 2 a phase holds")]
    TooManySamples(usize),
}
