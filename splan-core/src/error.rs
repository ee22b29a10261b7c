use thiserror::Error;

/// Errors raised while validating generation settings.
///
/// Running out of sentences is not an error: generators return fewer items,
/// or an empty [`GeneratedDocument`](crate::GeneratedDocument) when the text
/// holds no usable sentence at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
	/// A count setting is outside its accepted range.
	#[error("{field} must be between {min} and {max}, got {value}")]
	CountOutOfRange {
		field: &'static str,
		value: u32,
		min: u32,
		max: u32,
	},

	/// A tool or setting value that is not recognized.
	#[error("unknown {field} '{value}'")]
	UnknownValue { field: &'static str, value: String },
}
