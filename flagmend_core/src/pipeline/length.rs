use crate::catalog::FlagCatalog;
use crate::pipeline::base::*;

/// Trim every value to its flag's maximum length.
///
/// Overflow is collected and given to the implicit flag, provided `implicit_required` holds and the joined overflow itself fits.
/// Otherwise there is nowhere safe to route it, and the parse fails.
pub(super) fn enforce_lengths(
    catalog: &FlagCatalog,
    pass: &[String],
    positions: &[usize],
    implicit_required: bool,
) -> Result<ParsePass, FlagError> {
    let mut checked = ParsePass::default();
    let mut overflow = ParsePass::default();
    let mut first_overflow: Option<(String, usize)> = None;

    for &position in positions {
        let flag = &pass[position];
        let Some(definition) = catalog.definition(flag) else {
            continue;
        };

        if definition.standalone() {
            checked.push(flag.clone());
            continue;
        }

        let value = pass
            .get(position + 1)
            .ok_or_else(|| FlagError::MissingArgument(flag.clone()))?;
        let (kept, remainder) = truncate(value, definition.max_length());
        checked.push(flag.clone());
        checked.push(kept);

        if !remainder.is_empty() {
            first_overflow.get_or_insert_with(|| (flag.clone(), definition.max_length()));
            overflow.push(remainder);
        }
    }

    let Some((flag, max_length)) = first_overflow else {
        return Ok(checked);
    };

    let implicit = catalog.implicit_flag();
    let routed = join_tokens(&overflow);

    if !implicit_required || routed.chars().count() > implicit.max_length() {
        return Err(FlagError::ExceedMaxLength { flag, max_length });
    }

    checked.push(implicit.name().to_string());
    checked.push(routed);
    Ok(checked)
}

/// Split `value` after `max_length` characters, trimming the spaces around the remainder.
fn truncate(value: &str, max_length: usize) -> (String, String) {
    match value.char_indices().nth(max_length) {
        Some((split, _)) => (
            value[..split].to_string(),
            value[split..].trim_matches(' ').to_string(),
        ),
        None => (value.to_string(), String::default()),
    }
}
