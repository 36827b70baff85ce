// crates/ports/src/attributes.rs
use std::path::Path;

/// Port for the two marker queries of the mode column.
///
/// `has_extended_attributes` looks at a symlink itself; `has_access_control_list`
/// follows it to the target.
pub trait AttributeProbe {
    fn has_extended_attributes(&self, path: &Path) -> bool;
    fn has_access_control_list(&self, path: &Path) -> bool;
}
