use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prodcat",
    version,
    about = "product-catalog filtering tool",
    long_about = "Prodcat joins users, categories and products into a denormalized product catalog and filters the visible rows by a free-text query and by owning user.\n\nExamples:\n  prodcat\n  prodcat -q iphone\n  prodcat -p Anna -q ba\n  prodcat --users ./data/users.json --categories ./data/categories.json --products ./data/products.json\n  prodcat -o catalog.html\n\nTip: Use --config to persist dataset paths and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'q',
        long = "q",
        visible_alias = "query",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Show only products whose name contains TEXT (case-insensitive)."
    )]
    pub query: Option<String>,

    #[arg(
        short = 'p',
        long = "p",
        visible_aliases = ["person", "owner"],
        value_name = "NAME",
        help_heading = "Filters",
        help = "Show only products owned by NAME (exact match)."
    )]
    pub person: Option<String>,

    #[arg(
        long = "users",
        value_name = "FILE",
        help_heading = "Input",
        help = "Users dataset (.json, .yml or .yaml)."
    )]
    pub users: Option<String>,

    #[arg(
        long = "categories",
        value_name = "FILE",
        help_heading = "Input",
        help = "Categories dataset (.json, .yml or .yaml)."
    )]
    pub categories: Option<String>,

    #[arg(
        long = "products",
        value_name = "FILE",
        help_heading = "Input",
        help = "Products dataset (.json, .yml or .yaml)."
    )]
    pub products: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.prodcat/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write the default config template if it does not exist yet."
    )]
    pub init_config: bool,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the visible rows to FILE (format inferred from the extension)."
    )]
    pub out: Option<String>,

    #[arg(
        long = "fmt",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: text, json, xml or html."
    )]
    pub format: Option<String>,

    #[arg(
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored terminal output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,
}
