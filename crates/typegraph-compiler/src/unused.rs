//! Diagnostics for mappers no schema type consumed.

use indexmap::IndexSet;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::mappers::MapperTable;

/// Configured mapper keys missing from `used`, in configuration order.
pub fn unused_mappers<'m>(mappers: &'m MapperTable, used: &IndexSet<String>) -> Vec<&'m str> {
    mappers.keys().filter(|key| !used.contains(*key)).collect()
}

/// Warn about unused mappers unless `show` is off.
pub fn report_unused_mappers(
    mappers: &MapperTable,
    used: &IndexSet<String>,
    show: bool,
) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let unused = unused_mappers(mappers, used);
    if !show || unused.is_empty() {
        return diagnostics;
    }

    let list = unused.join(",");
    tracing::warn!(mappers = %list, "unused mappers");
    let mut report = diagnostics.report(DiagnosticKind::UnusedMappers).message(&list);
    for name in unused {
        report = report.subject(name);
    }
    report.emit();
    diagnostics
}
