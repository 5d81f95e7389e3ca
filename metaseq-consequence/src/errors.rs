use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsequenceError {
    #[error(
        "Consequence combination `{combination}` contains an unknown consequence `{term}`; the consequence groups must be extended before it can be ranked"
    )]
    InvalidConsequenceTerm { combination: String, term: String },
    #[error("Consequence combination `{0}` not found in the rankings")]
    UnknownConsequence(String),
    #[error("Cannot rank an empty consequence combination")]
    EmptyCombination,
    #[error("No ranking file configured")]
    NoRankingFile,
    #[error("Ranking file is missing the `{0}` column")]
    MissingColumn(&'static str),
    #[error("Invalid rank `{value}` on line {line} of the ranking file")]
    InvalidRank { line: usize, value: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RankerConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
