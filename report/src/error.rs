/// A lift downtime report extraction that cannot be converted into records.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("required field {0:?} is missing or empty")]
    MissingField(String),

    #[error("cannot parse time {value:?} as \"dd.mm.yyyy HH:MM\": {source}")]
    BadTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("downtime hours {value:?} is not a whole number: {source}")]
    BadDowntime {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
