//! Guess The Show CLI
//!
//! Usage:
//!   guesstheshow                          # Pick a genre, 3 wrong guesses, no clock
//!   guesstheshow --timed                  # 6 wrong guesses, 45 seconds per guess
//!   guesstheshow --genre "science fiction"
//!   guesstheshow --catalog shows.json     # Genres from a JSON file
//!   guesstheshow --list-genres
//!   guesstheshow --json                   # One JSON object per event

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use guesstheshow::config::GameConfig;
use guesstheshow::core::{
    play, Catalog, InputEvent, LineSource, ReaderLines, SessionOptions, SimpleRng, TurnEngine,
};
use guesstheshow::types::{GameMode, SecretPhrase};
use guesstheshow::{GameError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "guesstheshow",
    version = VERSION,
    about = "Guess The Show - hangman over TV show titles",
    long_about = "Guess The Show picks a TV show title from the genre you choose.\n\n\
                  Guess one letter at a time or the whole title. Wrong letters,\n\
                  wrong titles and timeouts each cost a guess.\n\n\
                  Type 'steal' to let the other player try one full-title guess.\n\
                  A wrong steal costs nothing; a right one wins it for them.\n\n\
                  Modes:\n  \
                  simple   3 wrong guesses, no clock (default)\n  \
                  --timed  6 wrong guesses, 45 seconds per guess"
)]
struct Args {
    /// Timed mode: 6 wrong guesses, 45 seconds per guess
    #[arg(short, long)]
    timed: bool,

    /// Genre to play (skips the menu)
    #[arg(short, long)]
    genre: Option<String>,

    /// Override the number of wrong guesses allowed
    #[arg(long)]
    max_incorrect: Option<u32>,

    /// Override the per-guess timeout in seconds (also enables it in simple mode)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Load genres from a JSON file: [{"name": "...", "titles": ["..."]}]
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the available genres and exit
    #[arg(long)]
    list_genres: bool,

    /// Seed for picking the title
    #[arg(long)]
    seed: Option<u64>,

    /// Output one JSON object per event
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn to_config(&self) -> GameConfig {
        let mode = if self.timed { GameMode::Timed } else { GameMode::Simple };
        let mut config = GameConfig::for_mode(mode)
            .with_max_incorrect(self.max_incorrect)
            .with_timeout_secs(self.timeout_secs);
        config.genre = self.genre.clone();
        config.catalog_path = self.catalog.clone();
        config.seed = self.seed;
        config.color = !self.no_color;
        config.json = self.json;
        config.verbose = self.verbose;
        config
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = args.to_config();
    init_tracing(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let catalog = match &config.catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    if args.list_genres {
        for name in catalog.genre_names() {
            println!("{}", name);
        }
        return;
    }

    let mut input = match ReaderLines::stdin() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: could not start input reader: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &catalog, &mut input).await {
        eprintln!("Game error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with the board
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Choose a genre, pick a title, play one game
async fn run(
    config: &GameConfig,
    catalog: &Catalog,
    input: &mut ReaderLines,
) -> Result<(), GameError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !config.json {
        print_header(&mut out, config)?;
    }

    let requested = match &config.genre {
        Some(genre) => genre.clone(),
        None => choose_genre(&mut out, catalog, input).await?,
    };

    let Some(genre) = catalog.find(&requested) else {
        writeln!(out, "Sorry, that genre isn't available.")?;
        return Ok(());
    };

    let mut rng = config.seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_time);
    let title = rng.choose(&genre.titles).ok_or_else(|| GameError::EmptyGenre {
        name: genre.name.clone(),
    })?;
    info!(genre = %genre.name, "title picked");

    let mut engine = TurnEngine::new(SecretPhrase::new(title)?, config.max_incorrect);
    let options = SessionOptions {
        guess_timeout: config.guess_timeout,
        color: config.color,
        json: config.json,
        genre: Some(genre.name.clone()),
    };

    let summary = play(&mut engine, input, &mut out, &options).await?;
    if !config.json {
        writeln!(
            out,
            "{}",
            format!(
                "Wrong guesses: {}/{} | time: {:.1}s",
                summary.incorrect,
                summary.max_incorrect,
                summary.duration_secs()
            )
            .as_str()
            .dimmed()
        )?;
    }
    Ok(())
}

/// Genre menu; end of input counts as no choice
async fn choose_genre<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    input: &mut ReaderLines,
) -> Result<String, GameError> {
    writeln!(out, "Choose a genre:")?;
    for name in catalog.genre_names() {
        writeln!(out, "- {}", name)?;
    }
    write!(out, "Enter genre: ")?;
    out.flush()?;

    match input.request_line(None).await {
        InputEvent::Line(line) => Ok(line),
        InputEvent::Expired | InputEvent::Closed => Ok(String::new()),
    }
}

fn print_header<W: Write>(out: &mut W, config: &GameConfig) -> Result<(), GameError> {
    let title = format!("Guess The Show v{} - {} Mode", VERSION, config.mode);
    writeln!(out, "========================================")?;
    writeln!(out, "  {}", title.as_str().bold())?;
    writeln!(out, "========================================")?;
    match config.guess_timeout {
        Some(limit) => writeln!(
            out,
            "{} wrong guesses allowed, {} seconds per guess.",
            config.max_incorrect,
            limit.as_secs()
        )?,
        None => writeln!(out, "{} wrong guesses allowed.", config.max_incorrect)?,
    }
    writeln!(out)?;
    Ok(())
}
