/// Field under which the store-assigned identifier is merged into documents
/// returned to callers.
pub const DOC_ID: &str = "id";

/// Separator for addressing embedded fields, e.g. `address.city`.
pub const FIELD_SEPARATOR: &str = ".";

/// Length of generated document identifiers.
pub const DEFAULT_ID_LENGTH: usize = 20;

/// Separator between path segments; not allowed in collection names or ids.
pub const PATH_SEPARATOR: char = '/';
