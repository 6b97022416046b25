use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use itertools::Itertools;

use crate::catalog::{CatalogEntry, Sex};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::datasource::DatasetSource;
use crate::output;
use crate::runner::{Options, Runner};

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_opt_value<'a>(v: &'a str, default: &'a str) -> &'a str {
    if v.trim().is_empty() {
        default
    } else {
        v
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    users_path: Option<String>,
    categories_path: Option<String>,
    products_path: Option<String>,
    query: String,
    owner: String,
    output: Option<String>,
    output_format: Option<String>,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let query = args.query.or(cfg.query).unwrap_or_default();
    let owner = args.person.or(cfg.person).unwrap_or_default();

    // dataset files come all-or-none, from the cli or from the config,
    // never mixed across the two layers.
    let cli_paths = (args.users, args.categories, args.products);
    let (users_path, categories_path, products_path) = match cli_paths {
        (Some(u), Some(c), Some(p)) => (Some(u), Some(c), Some(p)),
        (None, None, None) => match (cfg.users, cfg.categories, cfg.products) {
            (Some(u), Some(c), Some(p)) => (Some(u), Some(c), Some(p)),
            (None, None, None) => (None, None, None),
            _ => {
                return Err(
                    "dataset files must be given together (users, categories and products)"
                        .to_string(),
                )
            }
        },
        _ => {
            return Err(
                "dataset files must be given together (users, categories and products)"
                    .to_string(),
            )
        }
    };
    let users_path = users_path.map(|p| config::expand_tilde_string(&p));
    let categories_path = categories_path.map(|p| config::expand_tilde_string(&p));
    let products_path = products_path.map(|p| config::expand_tilde_string(&p));

    let output = args
        .out
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = args.format.or(cfg.output_format);
    if let Some(raw) = output_format.as_deref() {
        if output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid output format '{raw}', expected text, json, xml or html"
            ));
        }
    }

    Ok(RunConfig {
        users_path,
        categories_path,
        products_path,
        query,
        owner,
        output,
        output_format,
        no_color,
    })
}

fn owner_cell(name: &str, sex: Sex) -> colored::ColoredString {
    match sex {
        Sex::Male => name.blue(),
        Sex::Female => name.red(),
    }
}

fn print_table(entries: &[CatalogEntry]) {
    if entries.is_empty() {
        println!("{}", output::NO_MATCHES_MESSAGE);
        return;
    }

    let id_width = entries
        .iter()
        .map(|e| e.id.to_string().chars().count())
        .max()
        .unwrap_or(2)
        .max(2);
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(7)
        .max("Product".len());
    let category_width = entries
        .iter()
        .map(|e| e.category_title.chars().count() + e.category_icon.chars().count() + 3)
        .max()
        .unwrap_or(8)
        .max("Category".len());

    // pad before coloring: ansi escapes would throw the widths off.
    let id_header = format!("{:<id_width$}", "ID");
    let name_header = format!("{:<name_width$}", "Product");
    let category_header = format!("{:<category_width$}", "Category");
    println!(
        "{}  {}  {}  {}",
        id_header.bold().white(),
        name_header.bold().white(),
        category_header.bold().white(),
        "User".bold().white(),
    );
    for entry in entries {
        let category = format!("{} - {}", entry.category_icon, entry.category_title);
        let id = format!("{:<id_width$}", entry.id);
        let name = format!("{:<name_width$}", entry.name);
        let category = format!("{:<category_width$}", category);
        println!(
            "{}  {}  {}  {}",
            id.bold(),
            name,
            category,
            owner_cell(&entry.owner_name, entry.owner_sex),
        );
    }
}

fn run(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    let from_files = run.users_path.is_some();
    let options = Options {
        users: run
            .users_path
            .clone()
            .map(DatasetSource::FilePath)
            .unwrap_or_else(|| Options::default().users),
        categories: run
            .categories_path
            .clone()
            .map(DatasetSource::FilePath)
            .unwrap_or_else(|| Options::default().categories),
        products: run
            .products_path
            .clone()
            .map(DatasetSource::FilePath)
            .unwrap_or_else(|| Options::default().products),
        query: run.query.clone(),
        owner: run.owner.clone(),
    };

    let runner = Runner::new(options).map_err(|e| e.to_string())?;
    let view = runner.run().map_err(|e| e.to_string())?;

    let owners: Vec<String> = view
        .entries
        .iter()
        .map(|e| e.owner_name.clone())
        .unique()
        .sorted()
        .collect();

    format_kv_line(
        "Catalog",
        &format!(
            "products={} owners={}",
            view.entries.len(),
            owners.join(",")
        ),
    );
    format_kv_line(
        "Source",
        if from_files {
            "dataset files"
        } else {
            "built-in demo data"
        },
    );
    format_kv_line(
        "Filters",
        &format!(
            "query={} person={}",
            format_opt_value(&run.query, "none"),
            format_opt_value(&run.owner, "none"),
        ),
    );
    println!();

    print_table(&view.visible);

    if let Some(outfile_path) = run.output.as_ref() {
        let output_format = run
            .output_format
            .as_deref()
            .and_then(output::OutputFormat::parse)
            .or_else(|| output::infer_format_from_path(outfile_path))
            .unwrap_or(output::OutputFormat::Text);

        let records = output::build_records(&view.visible);
        let rendered = match output_format {
            output::OutputFormat::Text => output::render_text(&records),
            output::OutputFormat::Json => output::render_json(&records),
            output::OutputFormat::Xml => output::render_xml(&records),
            output::OutputFormat::Html => output::render_html(&records),
        };

        std::fs::write(outfile_path, rendered)
            .map_err(|e| format!("failed to write output file '{outfile_path}': {e}"))?;
    }

    println!();
    println!(
        ":: {} of {} products shown ::",
        view.visible.len(),
        view.entries.len()
    );

    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", CliArgs::command().render_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = args
            .config
            .as_deref()
            .map(config::expand_tilde)
            .or_else(config::default_config_path)
            .ok_or_else(|| "could not determine config path".to_string())?;
        config::ensure_default_config_file(&path)?;
    }

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, args.init_config)?,
        None => ConfigFile::default(),
    };

    let run_config = build_run_config(args, cfg)?;
    run(run_config)
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_query_overrides_config_query() {
        let args = CliArgs::parse_from(["prodcat", "-q", "milk"]);
        let cfg = ConfigFile {
            query: Some("bread".to_string()),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert_eq!(run.query, "milk");
    }

    #[test]
    fn config_fills_missing_owner_filter() {
        let args = CliArgs::parse_from(["prodcat"]);
        let cfg = ConfigFile {
            person: Some("Anna".to_string()),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert_eq!(run.owner, "Anna");
    }

    #[test]
    fn color_flag_overrides_no_color() {
        let args = CliArgs::parse_from(["prodcat", "--clr", "--no-color"]);
        let run = build_run_config(args, ConfigFile::default()).unwrap();
        assert!(!run.no_color);
    }

    #[test]
    fn config_no_color_is_respected() {
        let args = CliArgs::parse_from(["prodcat"]);
        let cfg = ConfigFile {
            no_color: Some(true),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert!(run.no_color);
    }

    #[test]
    fn partial_config_dataset_selection_is_rejected() {
        let args = CliArgs::parse_from(["prodcat"]);
        let cfg = ConfigFile {
            users: Some("./users.json".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(args, cfg).is_err());
    }

    #[test]
    fn invalid_config_output_format_is_rejected() {
        let args = CliArgs::parse_from(["prodcat"]);
        let cfg = ConfigFile {
            output_format: Some("csv".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(args, cfg).is_err());
    }
}
