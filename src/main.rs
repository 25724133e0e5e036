use clap::{Parser, Subcommand};
use offset::{
    Config, Dashboard, DashboardView, Dataset, DirectorySink, ExportFormat, FilterCriteria, PageSize, PipelineError,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "offset", version, about = "Browse carbon credits and export retirement certificates")]
struct Cli {
    #[arg(long, global = true, help = "JSON catalog to load instead of the embedded one")]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of credits.
    List {
        #[arg(long, short, default_value = "", help = "Case-insensitive project name search")]
        search: String,
        #[arg(long, short, help = "Only show credits of this vintage year")]
        vintage: Option<i32>,
        #[arg(long, short, default_value_t = 1)]
        page: usize,
        #[arg(long, help = "Credits per page: 10, 25, 50 or 100")]
        page_size: Option<String>,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// List the vintage years present in the catalog.
    Vintages,
    /// Count active and retired credits matching the filters.
    Summary {
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, short)]
        vintage: Option<i32>,
    },
    /// Export a retirement certificate for one credit.
    Export {
        id: String,
        #[arg(long, short)]
        format: Option<ExportFormat>,
        #[arg(long, short, help = "Directory to save the certificate in")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let dataset = match cli.dataset.as_ref().or(config.dataset.path.as_ref()) {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::embedded()?,
    };
    let mut dashboard = Dashboard::new(dataset).with_page_size(config.dashboard.page_size);

    match cli.command {
        Commands::List {
            search,
            vintage,
            page,
            page_size,
            json,
        } => {
            if let Some(page_size) = page_size {
                dashboard.set_page_size(page_size.parse::<PageSize>()?);
            }
            dashboard.set_search_text(search);
            dashboard.set_vintage_filter(vintage);
            dashboard.go_to_page(page);

            let view = dashboard.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
        Commands::Vintages => {
            for vintage in dashboard.dataset().vintages() {
                println!("{}", vintage);
            }
        }
        Commands::Summary { search, vintage } => {
            let criteria = FilterCriteria::new(search, vintage);
            let filtered = offset::filter_credits(dashboard.dataset().records(), &criteria);
            let summary = offset::CreditSummary::from_records(&filtered);
            println!("Active credits:  {}", summary.active);
            println!("Retired credits: {}", summary.retired);
            println!("Total credits:   {}", summary.total);
        }
        Commands::Export { id, format, out } => {
            let format = format.unwrap_or(config.export.format);
            let mut sink = DirectorySink::new(out.unwrap_or(config.export.output_dir));
            dashboard.export(&id, format, &mut sink)?;
            println!("Saved {}", sink.path_for(&format.filename_for(&id)).display());
        }
    }

    Ok(())
}

fn print_view(view: &DashboardView<'_>) {
    println!(
        "{} active | {} retired | {} total",
        view.summary.active, view.summary.retired, view.summary.total
    );
    println!();

    if view.is_empty() {
        println!("No Credits Found");
        println!("Try adjusting your search criteria to find carbon credits.");
        return;
    }

    for credit in &view.records {
        println!(
            "[{:<7}] {}  {}  (vintage {})",
            credit.status, credit.id, credit.project_name, credit.vintage_year
        );
    }

    let window = &view.window;
    if let Some((start, end)) = window.item_range {
        println!();
        println!("Showing {} to {} of {} credits", start, end, window.total_items);
    }
    if window.shows_controls() {
        let pages: Vec<String> = window
            .visible_pages
            .iter()
            .map(|page| {
                if *page == window.current_page {
                    format!("[{}]", page)
                } else {
                    page.to_string()
                }
            })
            .collect();
        println!(
            "{} {} {}",
            if window.has_previous() { "< Previous" } else { "" },
            pages.join(" "),
            if window.has_next() { "Next >" } else { "" }
        );
    }
}
