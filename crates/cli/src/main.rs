use clap::{Parser, Subcommand};
use praxis_core::{
    config::resolve_reviews_path, segment, CardRenderer, CoreConfig, ReviewCatalog,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "praxis")]
#[command(about = "Practitioner-site review service CLI")]
struct Cli {
    /// Review collection file (defaults to data/reviews.json)
    #[arg(long)]
    reviews: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all reviews
    List,
    /// Show one review as a rendered card
    Show {
        /// Review id
        id: u32,
    },
    /// Segment a raw review text file, print the sections as JSON
    Segment {
        /// Path to a UTF-8 text file
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            let catalog = load_catalog(cli.reviews)?;
            if catalog.is_empty() {
                println!("No reviews found.");
            } else {
                for review in catalog.list() {
                    println!(
                        "ID: {}, Author: {}, Date: {}, Rating: {}",
                        review.id, review.author, review.date, review.rating
                    );
                }
            }
        }
        Some(Commands::Show { id }) => {
            let catalog = load_catalog(cli.reviews)?;
            match catalog.get(id) {
                Ok(record) => {
                    let parsed = segment(&record.full_text);
                    print!("{}", CardRenderer::new().card_render(record, &parsed));
                }
                Err(e) => eprintln!("Error showing review: {}", e),
            }
        }
        Some(Commands::Segment { file }) => {
            let raw = std::fs::read_to_string(&file)?;
            let parsed = segment(&raw);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        None => {
            println!("Use 'praxis --help' for commands");
        }
    }

    Ok(())
}

fn load_catalog(
    override_path: Option<PathBuf>,
) -> Result<ReviewCatalog, Box<dyn std::error::Error>> {
    let path = resolve_reviews_path(override_path)?;
    let cfg = CoreConfig::new(path)?;
    Ok(ReviewCatalog::load(&cfg)?)
}
