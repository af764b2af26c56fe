use flagmend::prelude::*;
use flagmend::{CatalogBuilder, FlagCatalog, FlagDefinition, FlagError, FlagParser, FlagType, Limits, SystemClock};

fn main() {
    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(error.exit_code());
        }
    };

    match mend(&catalog, std::env::args().skip(1), SystemClock) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(error.exit_code());
        }
    }
}

// The flags of an `add` command for a todo list.
fn catalog() -> Result<FlagCatalog, FlagError> {
    CatalogBuilder::new(Limits::default())
        .text("-b")
        .tag("-t")
        .flag(FlagDefinition::new("-m", FlagType::Str, 1))
        .integer("-c")
        .integer("-p")
        .date("-d")
        .switch("--append")
        .build()
}

// Unit-testable function to execute the parser against the specified tokens.
fn mend(
    catalog: &FlagCatalog,
    tokens: impl IntoIterator<Item = String>,
    clock: impl Clock,
) -> Result<Vec<String>, FlagError> {
    FlagParser::new(catalog, tokens, clock).parse()
}
