use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --format '{raw}', expected text, json, xml or html"
            ));
        }
    }
    let given = [&args.users, &args.categories, &args.products]
        .iter()
        .filter(|p| p.is_some())
        .count();
    if given != 0 && given != 3 {
        return Err(
            "dataset files must be given together (--users, --categories and --products)"
                .to_string(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn rejects_unknown_format() {
        let args = CliArgs::parse_from(["prodcat", "--fmt", "csv"]);
        assert!(validate(&args).is_err());
    }

    #[test]
    fn rejects_partial_dataset_selection() {
        let args = CliArgs::parse_from(["prodcat", "--users", "./users.json"]);
        assert!(validate(&args).is_err());
    }

    #[test]
    fn accepts_no_datasets_at_all() {
        let args = CliArgs::parse_from(["prodcat", "-q", "milk"]);
        assert!(validate(&args).is_ok());
    }
}
