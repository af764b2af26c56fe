use crate::catalog::FlagCatalog;
use crate::model::FlagType;
use crate::pipeline::base::*;

/// Condense the free text between canonical flags into a single value per flag.
///
/// Text that precedes the first flag is most likely the value of the implicit flag, so it is moved to the end of the pass.
/// A flag with nothing between it and the next flag is left without a value.
/// When there are no flags at all, the entire input becomes one free text token.
pub(super) fn reassemble_tokens(catalog: &FlagCatalog, pass: &[String]) -> ParsePass {
    let positions = catalog.flag_positions(pass);

    if positions.is_empty() {
        return vec![join_tokens(pass)];
    }

    let mut reassembled = ParsePass::default();
    let mut suffix = ParsePass::default();

    if positions[0] != 0 {
        suffix.push(join_tokens(&pass[..positions[0]]));
    }

    for (i, &position) in positions.iter().enumerate() {
        let end = positions.get(i + 1).copied().unwrap_or(pass.len());
        let value = join_tokens(&pass[position + 1..end]);
        reassembled.push(pass[position].clone());

        if !value.is_empty() {
            reassembled.push(value);
        }
    }

    reassembled.extend(suffix);
    reassembled
}

/// Separate the leading digits of each integer flag's value from any trailing text.
///
/// The digits remain as the value, while the trailing text is appended to the end of the pass to be claimed later (typically by the implicit flag).
pub(super) fn split_numeric(
    catalog: &FlagCatalog,
    mut pass: ParsePass,
    positions: &[usize],
) -> ParsePass {
    for &position in positions {
        let is_integer = catalog
            .definition(&pass[position])
            .map_or(false, |definition| {
                definition.flag_type() == FlagType::Integer
            });

        if !is_integer {
            continue;
        }

        let Some(value) = pass.get(position + 1) else {
            continue;
        };

        let digits = numeric_prefix(value);

        if digits.is_empty() {
            continue;
        }

        let remainder = value[digits.len()..].trim_matches(' ').to_string();

        if !remainder.is_empty() {
            pass[position + 1] = digits.to_string();
            pass.push(remainder);
        }
    }

    pass
}

/// The leading run of ASCII digits in `value`.
fn numeric_prefix(value: &str) -> &str {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    &value[..end]
}
