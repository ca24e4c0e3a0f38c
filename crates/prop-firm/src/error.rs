use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropFirmError {
    #[error("Phase rules from configuration are invalid: {0}")]
    InvalidRules(String),
}
