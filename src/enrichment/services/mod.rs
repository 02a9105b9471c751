mod identifier_validator;
mod record_extractor;

pub use identifier_validator::IdentifierValidator;
pub use record_extractor::RecordExtractor;
