use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockroom::catalog::Catalog;
use stockroom::paging;
use stockroom::query::{Selection, SortMode, query};
use stockroom::record::SaleStatus;
use stockroom::{catalog, output};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Filesystem-backed inventory catalog for second-hand garments")]
#[command(long_about = "\
Filesystem-backed inventory catalog for second-hand garments

Your filesystem is the data source. Each item is a directory holding one
metadata.json plus its photos, three levels below the content root:

  catalog/
  ├── 2024-01-Session/             # Collection
  │   ├── Tops/                    # Category
  │   │   ├── CAM-0012/            # Item (directory name = item id)
  │   │   │   ├── metadata.json
  │   │   │   ├── CAM-0012_Frente_Mini.jpg
  │   │   │   └── CAM-0012_Espalda_Mini.jpg
  │   │   └── CAM-0019/
  │   └── Pants/
  └── 2024-02-Session/

Cover resolution (first existing file wins):
  {id}_Frente_Mini.jpg → {id}_Frente.jpg → Frente.jpg
Items without a cover are skipped; run 'stockroom report' to see why items
were dropped from the catalog.")]
#[command(version)]
struct Cli {
    /// Content root directory
    #[arg(long, default_value = "catalog", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog items with filters, sorting and pagination
    List(ListArgs),
    /// Show item directories skipped during the scan, and why
    Report {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify that every recorded cover and gallery image is readable
    Check,
    /// Show the distinct sizes and brands available for filtering
    Filters {
        /// Emit the filter values as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ListArgs {
    /// Statuses to include (comma-separated). An empty selection shows nothing.
    #[arg(long, value_delimiter = ',', default_value = "available")]
    status: Vec<SaleStatus>,

    /// Sizes to include (comma-separated); omit for no size restriction
    #[arg(long, value_delimiter = ',')]
    size: Vec<String>,

    /// Brands to include (comma-separated, case-insensitive); omit for no restriction
    #[arg(long, value_delimiter = ',')]
    brand: Vec<String>,

    #[arg(long, value_enum, default_value_t = SortArg::Newest)]
    sort: SortArg,

    /// Zero-based page index (24 items per page)
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Emit the page as JSON instead of the text listing
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// Newest items first (descending id)
    Newest,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> SortMode {
        match arg {
            SortArg::Newest => SortMode::NewestFirst,
            SortArg::PriceAsc => SortMode::PriceAscending,
            SortArg::PriceDesc => SortMode::PriceDescending,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => {
            let catalog = Catalog::build(&cli.root)?;
            let selection = Selection {
                statuses: args.status,
                sizes: args.size,
                // Catalog brands are uppercased; accept any case on the CLI.
                brands: args.brand.iter().map(|b| b.to_uppercase()).collect(),
                sort: args.sort.into(),
            };
            let filtered = query(&catalog, &selection);
            let page = paging::paginate(&filtered, args.page);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page.items)?);
            } else {
                output::print_list(&page, filtered.len(), args.page);
            }
        }
        Command::Report { json } => {
            let catalog = Catalog::build(&cli.root)?;
            if json {
                let report: Vec<serde_json::Value> = catalog
                    .skipped()
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "id": s.id,
                            "path": s.path,
                            "reason": s.reason.to_string(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_report(&catalog);
            }
        }
        Command::Check => {
            let catalog = Catalog::build(&cli.root)?;
            let failures = catalog::verify_images(&catalog);
            output::print_check(&catalog, &failures);
            if !failures.is_empty() {
                std::process::exit(1);
            }
        }
        Command::Filters { json } => {
            let catalog = Catalog::build(&cli.root)?;
            if json {
                let filters = serde_json::json!({
                    "sizes": catalog.sizes(),
                    "brands": catalog.brands(),
                });
                println!("{}", serde_json::to_string_pretty(&filters)?);
            } else {
                output::print_filters(&catalog);
            }
        }
    }

    Ok(())
}
