use crate::error::DocCardsError;

pub type DocCardsResult<T> = Result<T, DocCardsError>;
