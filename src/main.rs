use anyhow::Context;
use chalkboard::config::ColorSpec;
use chalkboard::{Chalkboard, Config, MountPoint, export, script};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chalkboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CHALKBOARD_GIT_HASH"), ")"),
    about = "Embeddable canvas drawing surface with freehand strokes"
)]
struct Cli {
    /// Config file to use instead of ~/.config/chalkboard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Replay a pointer script onto a fresh board and save it as PNG
    Replay {
        /// Script with one `down X Y`, `move X Y`, `up` or `clear` per line
        script: PathBuf,

        /// Output file (defaults to a timestamped file in the export directory)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        board: BoardArgs,
    },
    /// Mount a board and print the host markup
    Markup {
        #[command(flatten)]
        board: BoardArgs,
    },
}

/// Per-run overrides for the configured board options.
#[derive(Args, Debug)]
struct BoardArgs {
    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Stroke color (name or #hex)
    #[arg(long, value_name = "COLOR")]
    line_color: Option<String>,

    /// Stroke width in pixels
    #[arg(long, value_name = "PIXELS")]
    line_width: Option<f64>,
}

impl BoardArgs {
    fn apply(self, config: &mut Config) -> anyhow::Result<()> {
        let board = &mut config.board;
        if let Some(width) = self.width {
            board.width = width;
        }
        if let Some(height) = self.height {
            board.height = height;
        }
        if let Some(color) = self.line_color {
            let spec = ColorSpec::Name(color);
            if spec.parse().is_none() {
                anyhow::bail!("Unrecognized line color {spec:?}");
            }
            board.line_color = spec;
        }
        if let Some(line_width) = self.line_width {
            board.line_width = line_width;
        }
        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        CliCommand::Replay {
            script: script_path,
            output,
            board,
        } => {
            board.apply(&mut config)?;
            config.validate_and_clamp();
            let commands = script::load_script(&script_path)
                .with_context(|| format!("Failed to load script {}", script_path.display()))?;

            let mut host = MountPoint::default();
            let mut chalkboard = Chalkboard::mount(&mut host, config.board.clone())
                .context("Failed to mount board")?;
            script::replay(&mut chalkboard, &commands);
            chalkboard.pointer_up();

            let saved = match output {
                Some(path) => export::save_png(chalkboard.surface(), &path)?,
                None => export::export_png(chalkboard.surface(), &config.export)?,
            };
            chalkboard.dispose(&mut host);

            println!("Saved {}", saved.display());
        }
        CliCommand::Markup { board } => {
            board.apply(&mut config)?;
            config.validate_and_clamp();
            let mut host = MountPoint::default();
            let chalkboard = Chalkboard::mount(&mut host, config.board.clone())
                .context("Failed to mount board")?;
            println!("{}", host.to_markup());
            chalkboard.dispose(&mut host);
        }
    }

    Ok(())
}
