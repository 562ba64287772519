//! Public API for subject formatting

pub use crate::subject::formatter::{
    format_subject, normalize_digits, MAX_SUBJECT_LENGTH, TRUNCATION_MARKER,
};
