use clap::{Parser, Subcommand};
use sheet_themes::{config, output, pipeline, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheet-themes")]
#[command(about = "Build every accent × scheme variant of the Sheet GTK theme")]
#[command(long_about = "\
Build every accent × scheme variant of the Sheet GTK theme

Each accent stylesheet is combined with each scheme stylesheet into a
self-contained theme package, which is then zipped next to itself.

Project structure:

  .
  ├── sheet.toml             # Optional overrides (see gen-config)
  ├── index.theme            # Copied into every package, if present
  └── gtk-3.0/
      ├── widgets.css        # Static asset, copied into every package
      ├── accent/
      │   ├── forest.css     # Accent \"Forest\"
      │   └── ocean.css      # Accent \"Ocean\"
      └── scheme/
          └── dark.css       # Scheme \"Dark\"

Output (the output directory is wiped on every build):

  dist/
  ├── Sheet-Forest-Dark/
  │   ├── index.theme
  │   ├── gtk-3.0/           # widgets.css, gtk.css, accent/, scheme/
  │   └── gtk-4.0 -> gtk-3.0
  ├── Sheet-Forest-Dark.zip
  ├── Sheet-Ocean-Dark/
  └── Sheet-Ocean-Dark.zip

Running without a command is the same as 'sheet-themes build'.")]
#[command(version)]
struct Cli {
    /// Project root; all configured paths are relative to it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output directory, overriding output_dir from sheet.toml
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble and zip every accent × scheme pair (default)
    Build,
    /// Validate inputs and list the packages a build would produce
    Check,
    /// Print a stock sheet.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let sheet_config = resolve_config(&cli)?;
            pipeline::build(&cli.root, &sheet_config, |event| {
                output::print_build_event(event, &cli.root)
            })?;
        }
        Command::Check => {
            let sheet_config = resolve_config(&cli)?;
            println!("==> Checking {}", cli.root.display());
            let inventory = scan::check_inputs(&cli.root, &sheet_config)?;
            output::print_check_output(&inventory, &sheet_config.theme_prefix);
            println!("==> Inputs are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `sheet.toml` from the project root and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<config::SheetConfig, config::ConfigError> {
    let mut sheet_config = config::load_config(&cli.root)?;
    if let Some(output_dir) = &cli.output {
        sheet_config.output_dir = output_dir.clone();
        sheet_config.validate()?;
    }
    Ok(sheet_config)
}
