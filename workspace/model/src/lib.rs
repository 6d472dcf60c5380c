pub mod entities;
pub mod seed;

use uuid::Uuid;

/// Generate a prefixed record identifier, e.g. `prop-2f6c…`.
///
/// The original data set uses human-readable prefixes (`prop-1`, `tenant-2`);
/// new records keep the prefix but draw the suffix from a UUID.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
