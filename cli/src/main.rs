//! tategaki CLI - Japanese vertical text layout tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use tategaki::{
    Composition, Document, DocumentRepository, ExportOptions, JsonFormat, KinsokuPolicy,
    LayoutOptions, PageSelection, SvgDirectoryRepository, SvgOptions, TextOptions,
};

#[derive(Parser)]
#[command(name = "tategaki")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Lay out Japanese text vertically and export SVG pages", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,

    #[command(flatten)]
    svg: SvgArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every page as an SVG file
    Svg {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        svg: SvgArgs,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Print the laid-out lines as plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Omit page separators
        #[arg(long)]
        no_separators: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Convert the laid-out document to JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show layout information
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct LayoutArgs {
    /// Characters per vertical line
    #[arg(long, default_value_t = tategaki::layout::DEFAULT_CHARS_PER_LINE)]
    chars_per_line: usize,

    /// Page budget in characters
    #[arg(long, default_value_t = tategaki::layout::DEFAULT_CHARS_PER_PAGE)]
    chars_per_page: usize,

    /// Line-breaking rule policy
    #[arg(long, value_enum, default_value = "pull-forward")]
    kinsoku: KinsokuMode,

    /// How lines are grouped into pages
    #[arg(long, value_enum, default_value = "line-grid")]
    composition: CompositionMode,
}

impl LayoutArgs {
    fn to_options(&self) -> LayoutOptions {
        LayoutOptions::new()
            .with_chars_per_line(self.chars_per_line)
            .with_chars_per_page(self.chars_per_page)
            .with_kinsoku(self.kinsoku.into())
            .with_composition(self.composition.into())
    }
}

#[derive(Args, Clone)]
struct SvgArgs {
    /// CSS font family for SVG output
    #[arg(long, env = "TATEGAKI_FONT_FAMILY")]
    font_family: Option<String>,

    /// Font size in pixels for SVG output
    #[arg(long)]
    font_size: Option<f32>,
}

impl SvgArgs {
    fn to_options(&self) -> SvgOptions {
        let mut options = SvgOptions::default();
        if let Some(ref family) = self.font_family {
            options = options.with_font_family(family.as_str());
        }
        if let Some(px) = self.font_size {
            options = options.with_font_size(px);
        }
        options
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KinsokuMode {
    /// Hang forbidden characters at the end of the line (default)
    PullForward,
    /// Move forbidden characters to the next line
    PushBack,
    /// Break strictly every N characters
    Disabled,
}

impl From<KinsokuMode> for KinsokuPolicy {
    fn from(mode: KinsokuMode) -> Self {
        match mode {
            KinsokuMode::PullForward => KinsokuPolicy::PullForward,
            KinsokuMode::PushBack => KinsokuPolicy::PushBack,
            KinsokuMode::Disabled => KinsokuPolicy::Disabled,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CompositionMode {
    /// Break into lines, then group lines into pages (default)
    LineGrid,
    /// Walk the raw characters, padding newlines to the line width
    CharacterStream,
}

impl From<CompositionMode> for Composition {
    fn from(mode: CompositionMode) -> Self {
        match mode {
            CompositionMode::LineGrid => Composition::LineGrid,
            CompositionMode::CharacterStream => Composition::CharacterStream,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Svg {
            input,
            output,
            layout,
            svg,
            pages,
        }) => cmd_svg(&input, output.as_deref(), &layout, &svg, pages.as_deref()),
        Some(Commands::Text {
            input,
            output,
            layout,
            no_separators,
            pages,
        }) => cmd_text(
            &input,
            output.as_deref(),
            &layout,
            !no_separators,
            pages.as_deref(),
        ),
        Some(Commands::Json {
            input,
            output,
            layout,
            compact,
        }) => cmd_json(&input, output.as_deref(), &layout, compact),
        Some(Commands::Info { input, layout }) => cmd_info(&input, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: export SVGs if input is provided
            if let Some(input) = cli.input {
                cmd_svg(&input, cli.output.as_deref(), &cli.layout, &cli.svg, None)
            } else {
                println!("{}", "Usage: tategaki <FILE> [OUTPUT]".yellow());
                println!("       tategaki --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn load_document(input: &Path, layout: &LayoutArgs) -> Result<Document, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    log::debug!("Read {} bytes from {}", text.len(), input.display());
    let doc = Document::from_text(&text, &layout.to_options())?;
    Ok(doc)
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(p.parse::<PageSelection>()?),
        None => Ok(PageSelection::All),
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_svg(
    input: &Path,
    output: Option<&Path>,
    layout: &LayoutArgs,
    svg: &SvgArgs,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = parse_pages(pages)?;

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .filter(|_| input != Path::new("-"))
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tategaki".to_string());
        PathBuf::from(format!("{}_pages", stem))
    });

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Laying out text...");
    let doc = load_document(input, layout)?;
    pb.inc(1);

    pb.set_message(format!("Writing {} page(s)...", doc.page_count()));
    let options = ExportOptions::new()
        .with_svg_options(svg.to_options())
        .with_pages(selection);
    let repo = SvgDirectoryRepository::new(&output_dir, options);
    let results = repo.export_all_pages(&doc);
    pb.inc(1);
    pb.finish_with_message("Done!");

    let mut written = Vec::new();
    let mut failed = 0;
    for result in results {
        match result {
            Ok(exported) => written.push(exported.file_name),
            Err(e) => {
                eprintln!("{}: {}", "Warning".yellow().bold(), e);
                failed += 1;
            }
        }
    }

    println!("\n{} {}", "Output directory:".green().bold(), output_dir.display());
    let count = written.len();
    for (i, name) in written.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }

    if failed > 0 {
        return Err(format!("{} page(s) failed to export", failed).into());
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    layout: &LayoutArgs,
    separators: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = parse_pages(pages)?;
    let doc = load_document(input, layout)?;

    let options = TextOptions::new()
        .with_page_separators(separators)
        .with_pages(selection);
    let text = tategaki::render::to_text(&doc, &options);

    write_or_print(output, &text)?;
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    layout: &LayoutArgs,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input, layout)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = tategaki::render::to_json(&doc, format)?;
    write_or_print(output, &json)?;
    Ok(())
}

fn cmd_info(input: &Path, layout: &LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input, layout)?;

    println!("{}", "Layout Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Chars per line".bold(), doc.chars_per_line());
    println!("{}: {}", "Chars per page".bold(), doc.chars_per_page());
    println!("{}: {}", "Lines per page".bold(), doc.lines_per_page());
    println!("{}: {:?}", "Kinsoku".bold(), doc.kinsoku());
    println!("{}: {:?}", "Composition".bold(), doc.composition());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Lines".bold(), doc.line_count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    let oversized: Vec<String> = doc
        .oversized_pages()
        .map(|page| page.number().to_string())
        .collect();
    if !oversized.is_empty() {
        println!(
            "{}: {}",
            "Over budget".yellow().bold(),
            oversized.join(", ")
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "tategaki".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Japanese vertical text layout tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/tategaki".dimmed());
    println!("License: MIT");
}
