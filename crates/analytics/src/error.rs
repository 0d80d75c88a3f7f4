use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Decimal overflow while calculating '{0}'")]
    Overflow(String),
}
