//! Built-in primitive validators
//!
//! These are the syntax and shape checks the standard schema delegates to.
//!
//! # Categories
//!
//! - **String**: length bounds, email, regex alternation
//! - **Numeric**: NaN, finiteness, integrality, safe range
//! - **Identifier**: UUID (v1/v4), object id
//! - **Temporal**: ISO 8601 dates and durations
//! - **Shape**: strict boolean, object, array, non-empty collections

// String validators
pub mod content;
pub mod length;

// Numeric validators
pub mod float;

// Identifier validators
pub mod identifier;

// Time validators
pub mod time;

// Shape validators
pub mod boolean;
pub mod size;
pub mod structure;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{Email, MatchesRegex, email};
pub use length::{
    LengthMode, MaxLength, MinLength, NotEmpty, StringLength, max_length, min_length, not_empty,
};

pub use float::{
    Finite, MAX_SAFE_INTEGER, NotNaN, SafeInteger, WholeNumber, finite, not_nan, safe_integer,
    whole_number,
};

pub use identifier::{ObjectId, Uuid, object_id};

pub use time::{
    Duration, DurationError, IsoDate, IsoDuration, is_iso_date, iso_date, iso_duration,
    parse_duration,
};

pub use boolean::{StrictBoolean, strict_boolean};
pub use size::{NotEmptyArray, NotEmptyObject, not_empty_array, not_empty_object};
pub use structure::{IsArray, IsObject, is_array, is_object};
