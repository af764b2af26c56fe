use crate::catalog::FlagCatalog;
use crate::pipeline::base::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Ensure every flag in `pass` has precisely one value, inserting the implicit flag before ownerless values.
///
/// Expects standalone flags to have already been removed.
/// Each insertion reduces the imbalance by one; `record` is invoked with every corrected pass.
pub(super) fn balance(
    catalog: &FlagCatalog,
    mut pass: ParsePass,
    mut record: impl FnMut(&[String]),
) -> Result<ParsePass, FlagError> {
    let implicit = catalog.implicit_flag().name();
    // Each insertion adds a flag, so the imbalance cannot outlast the original length.
    let guard = pass.len();

    for _ in 0..=guard {
        let flag_count = catalog.flag_positions(&pass).len();
        let argument_count = pass.len() - flag_count;

        if argument_count < flag_count {
            return Err(FlagError::MissingArgument(valueless_flag(catalog, &pass)));
        }

        if argument_count == flag_count {
            break;
        }

        // Flags sit at even positions; the first even position without a valued flag is an ownerless value.
        let insertion = (0..pass.len()).step_by(2).find(|&i| {
            !catalog
                .definition(&pass[i])
                .map_or(false, |definition| !definition.standalone())
        });

        match insertion {
            Some(i) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Inserting implicit flag '{implicit}' before '{}' (position {i}).", pass[i]);
                }

                pass.insert(i, implicit.to_string());
                record(&pass);
            }
            None => break,
        }
    }

    // Balanced counts may still pair a flag with the following flag.
    if let Some(i) = (1..pass.len())
        .step_by(2)
        .find(|&i| catalog.is_flag(&pass[i]))
    {
        return Err(FlagError::MissingArgument(pass[i - 1].clone()));
    }

    Ok(pass)
}

/// The first flag in `pass` not followed by a value.
fn valueless_flag(catalog: &FlagCatalog, pass: &[String]) -> String {
    pass.iter()
        .enumerate()
        .find(|(i, token)| {
            catalog.is_flag(token)
                && pass
                    .get(i + 1)
                    .map_or(true, |next| catalog.is_flag(next))
        })
        .map(|(_, token)| token.clone())
        .unwrap_or_default()
}
