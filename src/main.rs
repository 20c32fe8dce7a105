// ABOUTME: Main entry point for the lesson-deck program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use lesson_deck::{Config, DeliveryType, LessonRequest, PresentationMeta};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Paginate lesson text into a JSON slide deck
    Deck(DeckArgs),

    /// Render lesson text as printable HTML slides
    Html(HtmlArgs),

    /// Print the prompt for a lesson request
    Prompt(PromptArgs),
}

#[derive(Args)]
struct DeckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Path to output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct HtmlArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct SourceArgs {
    /// Path to the generated lesson text
    #[arg(short, long)]
    input: PathBuf,

    /// Subject shown on the title slide
    #[arg(long, default_value = "")]
    subject: String,

    /// Grade shown on the title slide
    #[arg(long, default_value = "")]
    grade: String,

    /// Duration shown on the title slide
    #[arg(long, default_value = "")]
    duration: String,

    /// Keep '*' emphasis markers instead of stripping them before parsing
    #[arg(long)]
    keep_emphasis: bool,

    /// Maximum content height per slide
    #[arg(long)]
    max_height: Option<f64>,

    /// Height consumed by each content line
    #[arg(long)]
    line_height: Option<f64>,

    /// Height reserved for the slide heading
    #[arg(long)]
    title_height: Option<f64>,

    /// Position of the first content line
    #[arg(long)]
    start_y: Option<f64>,

    /// Section background colors (hex, comma separated)
    #[arg(long, value_delimiter = ',')]
    palette: Option<Vec<String>>,
}

#[derive(Args)]
struct PromptArgs {
    #[arg(long)]
    topic: String,

    #[arg(long)]
    grade: String,

    #[arg(long)]
    duration: String,

    /// Activity Based, Enquiry Based, Experimental Learning or Content
    #[arg(long, default_value = "Content")]
    delivery_type: String,
}

fn build_from_source(
    config: &Config,
    args: &SourceArgs,
) -> lesson_deck::Result<(lesson_deck::Deck, lesson_deck::Layout)> {
    let layout = config.get_layout(
        args.max_height,
        args.line_height,
        args.title_height,
        args.start_y,
        args.palette.clone(),
    );
    let strip = config.strip_emphasis && !args.keep_emphasis;
    let text = lesson_deck::utils::read_lesson_text(&args.input, strip)?;
    let meta = PresentationMeta::new(&args.subject, &args.grade, &args.duration);

    let deck = lesson_deck::build_deck(&text, &meta, &layout)?;
    Ok((deck, layout))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_env();

    let result: lesson_deck::Result<()> = match &cli.command {
        Some(Commands::Deck(args)) => build_from_source(&config, &args.source).and_then(
            |(deck, _)| {
                let json = deck.to_json()?;
                match &args.output {
                    Some(path) => {
                        lesson_deck::utils::ensure_parent_directory_exists(path)?;
                        fs::write(path, json).map_err(|e| {
                            anyhow::anyhow!("Failed to write output file: {}", e)
                        })?;
                        info!("Deck written to {:?}", path);
                        println!("Deck generated successfully: {:?}", path);
                    }
                    None => println!("{}", json),
                }
                Ok(())
            },
        ),
        Some(Commands::Html(args)) => {
            build_from_source(&config, &args.source).and_then(|(deck, layout)| {
                let html = lesson_deck::generate_html(&deck, &layout);
                lesson_deck::write_html_to_file(&html, &args.output)?;
                println!("HTML generated successfully: {:?}", args.output);
                Ok(())
            })
        }
        Some(Commands::Prompt(args)) => {
            args.delivery_type
                .parse::<DeliveryType>()
                .map(|delivery_type| {
                    let request = LessonRequest::new(
                        &args.topic,
                        &args.grade,
                        &args.duration,
                        delivery_type,
                    );
                    println!("{}", request.prompt());
                })
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
