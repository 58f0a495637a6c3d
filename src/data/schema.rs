//! Fixed column layout of the recorded motion-sample CSV files.

/// Column names assigned by position to every headerless row.
pub const COLUMN_NAMES: [&str; 14] = [
    "id", "label", "roll", "pitch", "yaw", "rotX", "rotY", "rotZ", "gravX", "gravY", "gravZ",
    "accX", "accY", "accZ",
];

/// Identifier columns, carried through untouched and never plotted.
pub const IDENTIFIER_COLUMNS: [&str; 2] = ["id", "label"];

/// Numeric motion channels in plotting order.
pub const FEATURE_COLUMNS: [&str; 12] = [
    "roll", "pitch", "yaw", "rotX", "rotY", "rotZ", "gravX", "gravY", "gravZ", "accX", "accY",
    "accZ",
];
