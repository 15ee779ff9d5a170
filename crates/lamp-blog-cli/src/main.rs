use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lamp_blog_config::Config;
use lamp_blog_engine::{
    BlockType, ContentBlock, DraftNamespace, DraftStore, blocks_to_markdown,
    drafts::{BlogDraft, DraftDefaults, DraftId, DraftInput, FileDraftStore, SaveMode},
    language::{is_filename, is_supported, language_display_name, language_from_filename},
    markdown_to_blocks,
};

#[derive(Parser)]
#[command(name = "lamp-blog", version, about = "Blog block converter and draft manager")]
struct Cli {
    /// Config file to use instead of ~/.config/lamp-blog/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse markdown into JSON blocks
    ToBlocks {
        /// Markdown file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Serialize JSON blocks back to markdown
    ToMarkdown {
        /// JSON blocks file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Check that markdown survives a parse/serialize/parse round trip
    Check {
        /// Markdown file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Print one summary line per block of a markdown file
    Outline {
        /// Markdown file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Manage saved drafts
    Drafts(DraftsArgs),

    /// Write a config file holding the default settings
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args)]
struct DraftsArgs {
    /// Draft namespace: "create" or "edit:<post id>"
    #[arg(short, long, default_value = "create")]
    namespace: DraftNamespace,

    #[command(subcommand)]
    command: DraftsCommand,
}

#[derive(Subcommand)]
enum DraftsCommand {
    /// List drafts, most recent first
    List,

    /// Print a draft as JSON (the current draft when no id is given)
    Show { id: Option<String> },

    /// Save a markdown file as a manual draft
    Save {
        file: PathBuf,

        #[arg(short, long)]
        title: String,

        /// Replace this draft instead of creating a new one
        #[arg(long)]
        id: Option<String>,

        /// Tag to attach. Repeatable.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete one draft
    Delete { id: String },

    /// Delete every draft in the namespace
    Clear,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::ToBlocks { file } => {
            let blocks = markdown_to_blocks(&read_input(file.as_deref())?);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Command::ToMarkdown { file } => {
            let json = read_input(file.as_deref())?;
            let blocks: Vec<ContentBlock> =
                serde_json::from_str(&json).context("Input is not a JSON array of blocks")?;
            print!("{}", blocks_to_markdown(&blocks));
        }
        Command::Check { file } => {
            let blocks = markdown_to_blocks(&read_input(file.as_deref())?);
            check_round_trip(&blocks)?;
            println!("ok: {} blocks round-trip", blocks.len());
        }
        Command::Outline { file } => {
            let blocks = markdown_to_blocks(&read_input(file.as_deref())?);
            for (index, block) in blocks.iter().enumerate() {
                println!("{}", outline_line(index, block));
            }
        }
        Command::Drafts(args) => {
            let config = load_config(cli.config.as_deref())?;
            run_drafts(&config, args)?;
        }
        Command::Init { force } => {
            let config_path = cli.config.unwrap_or_else(Config::config_path);
            write_default_config(&config_path, force)?;
            println!("{}", config_path.display());
        }
    }
    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file '{}' already exists (use --force to replace it)",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());
    Ok(Config::load_or_default(&config_path)?)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Cannot read stdin")?;
            Ok(input)
        }
    }
}

/// Serialize and reparse `blocks`, failing on the first block whose meaning
/// changed.
fn check_round_trip(blocks: &[ContentBlock]) -> Result<()> {
    let reparsed = markdown_to_blocks(&blocks_to_markdown(blocks));
    for (index, (before, after)) in blocks.iter().zip(&reparsed).enumerate() {
        if !before.is_equivalent(after) {
            bail!(
                "block {index} ({}) changed on reparse:\n  before: {}\n  after:  {}",
                before.block_type,
                serde_json::to_string(before)?,
                serde_json::to_string(after)?
            );
        }
    }
    if blocks.len() != reparsed.len() {
        bail!(
            "block count changed on reparse: {} before, {} after",
            blocks.len(),
            reparsed.len()
        );
    }
    Ok(())
}

/// `index`, block type and a short description, tab separated.
fn outline_line(index: usize, block: &ContentBlock) -> String {
    let detail = match block.block_type {
        BlockType::Heading => format!("h{} {}", block.heading_level(), block.content),
        BlockType::Code => describe_code(block),
        BlockType::List | BlockType::NumberedList => match block.items().len() {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        },
        BlockType::Image | BlockType::Video => block.content.clone(),
        BlockType::Paragraph | BlockType::Quote => first_line(&block.content, 60),
        BlockType::Separator => String::new(),
    };
    format!("{index}\t{}\t{detail}", block.block_type)
}

fn describe_code(block: &ContentBlock) -> String {
    let language = language_from_filename(&block.code_language());
    let mut detail = language_display_name(&language);
    if let Some(filename) = block.filename().filter(|f| is_filename(f)) {
        detail.push_str(&format!(" ({filename})"));
    }
    if !is_supported(&language) {
        detail.push_str(" [no highlighting]");
    }
    let lines = block.content.lines().count();
    detail.push_str(&format!(", {lines} line{}", if lines == 1 { "" } else { "s" }));
    detail
}

fn first_line(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > max_chars {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

fn run_drafts(config: &Config, args: DraftsArgs) -> Result<()> {
    let defaults = DraftDefaults {
        author_id: config.default_author_id.clone(),
        author_name: config.default_author_name.clone(),
    };
    let mut store = FileDraftStore::new(&config.drafts_path, defaults);
    let ns = &args.namespace;
    log::debug!("Drafts directory: {}", store.dir().display());

    match args.command {
        DraftsCommand::List => {
            for draft in store.list(ns)? {
                println!("{}", summary_line(&draft));
            }
        }
        DraftsCommand::Show { id } => {
            let draft = match id {
                Some(id) => store.get(ns, &DraftId::from(id.as_str()))?,
                None => store.current(ns)?,
            };
            match draft {
                Some(draft) => println!("{}", serde_json::to_string_pretty(&draft)?),
                None => bail!("No such draft in {ns}"),
            }
        }
        DraftsCommand::Save {
            file,
            title,
            id,
            tags,
        } => {
            let content = read_input(Some(&file))?;
            let input = DraftInput {
                id: id.map(DraftId::from),
                title: Some(title),
                content: Some(content),
                tags: Some(tags),
                ..Default::default()
            };
            let id = store.save(ns, input, SaveMode::Manual)?;
            println!("{id}");
        }
        DraftsCommand::Delete { id } => {
            if !store.delete(ns, &DraftId::from(id.as_str()))? {
                bail!("No draft '{id}' in {ns}");
            }
        }
        DraftsCommand::Clear => store.clear(ns)?,
    }
    Ok(())
}

fn summary_line(draft: &BlogDraft) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        draft.id,
        draft.last_saved.format("%Y-%m-%d %H:%M"),
        if draft.auto_saved { "auto" } else { "manual" },
        if draft.title.is_empty() {
            "(untitled)"
        } else {
            draft.title.as_str()
        }
    )
}
