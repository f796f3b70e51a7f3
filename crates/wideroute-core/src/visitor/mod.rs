mod route;

pub use route::*;

use crate::pattern::AccessPattern;

// ============================================================================
// CatalogVisitor
// ============================================================================

/// Seam between enumeration and everything that renders its output.
///
/// `PatternCatalog::accept` calls `visit_pattern` once per pattern in
/// insertion order, then `finish` exactly once. Emitters (route tables,
/// repository interfaces, client stubs) implement this trait and never
/// reach into the enumerator.
pub trait CatalogVisitor {
    fn visit_pattern(&mut self, pattern: &AccessPattern);

    fn finish(&mut self) {}
}
