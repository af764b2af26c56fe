use std::collections::BTreeMap;

use crate::catalog::FlagCatalog;
use crate::pipeline::base::*;

/// Standalone flags removed from a pass, keyed by their position within it.
pub(super) type StandaloneRegistry = BTreeMap<usize, String>;

/// Remove the standalone flags from `pass`, so the remainder has a uniform flag/value rhythm.
pub(super) fn extract_standalones(
    catalog: &FlagCatalog,
    pass: ParsePass,
    positions: &[usize],
) -> (ParsePass, StandaloneRegistry) {
    let registry: StandaloneRegistry = positions
        .iter()
        .filter(|&&position| {
            catalog
                .definition(&pass[position])
                .map_or(false, |definition| definition.standalone())
        })
        .map(|&position| (position, pass[position].clone()))
        .collect();

    if registry.is_empty() {
        return (pass, registry);
    }

    let remaining = pass
        .into_iter()
        .enumerate()
        .filter(|(position, _)| !registry.contains_key(position))
        .map(|(_, token)| token)
        .collect();

    (remaining, registry)
}

/// Append the standalone flags to the end of `pass`, in their original relative order.
pub(super) fn reinsert_standalones(mut pass: ParsePass, registry: StandaloneRegistry) -> ParsePass {
    pass.extend(registry.into_values());
    pass
}
