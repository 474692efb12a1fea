//! Command-line front end for BinMeta.
//!
//! Reads a class dump and the two name dictionaries, generates every class,
//! and writes the result either to a single file or to one file per class.

use anyhow::Context;
use binmeta::prelude::*;
use clap::{Args, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Generate C# classes from a reflected class dump.
#[derive(Debug, Parser)]
#[command(name = "binmeta", version, about)]
pub struct Cli {
    /// Class dump JSON file.
    pub schema: PathBuf,

    /// Class name dictionary.
    #[arg(long, default_value = "hashes.bintypes.txt")]
    pub classes: PathBuf,

    /// Field name dictionary.
    #[arg(long, default_value = "hashes.binfields.txt")]
    pub fields: PathBuf,

    /// Output file receiving every class.
    #[arg(short, long, default_value = "classes.cs", conflicts_with = "out_dir")]
    pub output: PathBuf,

    /// Write one `<ClassName>.cs` file per class into this directory instead.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Skip classes that fail to generate instead of aborting.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Generator shape options.
#[derive(Debug, Clone, Args)]
pub struct GeneratorArgs {
    /// Base profile.
    #[arg(long, value_enum, default_value_t = ProfileArg::Current)]
    pub profile: ProfileArg,

    /// Do not re-declare interface properties in concrete classes.
    #[arg(long)]
    pub no_merge_interfaces: bool,

    /// Emit link properties as the bare class name.
    #[arg(long)]
    pub bare_links: bool,

    /// Emit optional properties as the bare element type.
    #[arg(long)]
    pub bare_optionals: bool,

    /// Do not emit `[BINValue]` annotations.
    #[arg(long)]
    pub no_annotations: bool,
}

/// Profile selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// Interface flattening, wrapper types and annotations.
    Current,
    /// Bare types, no annotations, no interface flattening.
    Legacy,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Current => Self::Current,
            ProfileArg::Legacy => Self::Legacy,
        }
    }
}

impl GeneratorArgs {
    /// Builds the generator configuration: the profile, then each override.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::from_profile(self.profile.into());
        if self.no_merge_interfaces {
            config = config.merge_interfaces(false);
        }
        if self.bare_links {
            config = config.wrap_links(false);
        }
        if self.bare_optionals {
            config = config.wrap_optionals(false);
        }
        if self.no_annotations {
            config = config.emit_annotations(false);
        }
        config
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Classes written.
    pub generated: usize,
    /// Classes skipped because they failed to generate.
    pub skipped: usize,
}

/// Runs the generator as described by `cli`.
///
/// # Errors
/// Returns an error if an input cannot be read or parsed, an output cannot
/// be written, or a class fails to generate without `--keep-going`.
pub fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let schema = parse_schema_file(&cli.schema)
        .with_context(|| format!("failed to read schema {}", cli.schema.display()))?;
    let ir = SchemaIr::from_schema(&schema).context("failed to resolve schema")?;
    let class_names = load_dictionary(&cli.classes)?;
    let field_names = load_dictionary(&cli.fields)?;

    let config = cli.generator.config();
    tracing::debug!("Generator configuration: {:?}", config);
    let generator = Generator::new(&ir, &class_names, &field_names).with_config(config);

    let mut blocks = Vec::with_capacity(ir.len());
    let mut skipped = 0;
    for (class, result) in generator.generate_each() {
        let name = generator.class_name(class.hash);
        match result {
            Ok(block) => blocks.push((name, block)),
            Err(e) if cli.keep_going => {
                tracing::warn!("Skipping {}: {}", name, e);
                skipped += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("failed to generate {}", name)),
        }
    }

    match &cli.out_dir {
        Some(dir) => write_split(dir, &blocks)?,
        None => {
            let rendered: Vec<String> = blocks.iter().map(|(_, block)| block.clone()).collect();
            std::fs::write(&cli.output, Generator::render(&rendered))
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
        }
    }

    let summary = Summary {
        generated: blocks.len(),
        skipped,
    };
    tracing::info!(
        "Generated {} classes, skipped {}",
        summary.generated,
        summary.skipped
    );
    Ok(summary)
}

fn load_dictionary(path: &Path) -> anyhow::Result<NameTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    let table = NameTable::from_dictionary(&text)
        .with_context(|| format!("failed to load dictionary {}", path.display()))?;
    tracing::info!("Loaded {} names from {}", table.len(), path.display());
    Ok(table)
}

fn write_split<N: AsRef<str>>(dir: &Path, blocks: &[(N, String)]) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    for (name, block) in blocks {
        let path = dir.join(format!("{}.cs", name.as_ref()));
        std::fs::write(&path, format!("{block}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
