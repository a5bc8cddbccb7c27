use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use gridclip::cli::{paste_source, paste_target, CliArgs, Command, PasteSource};
use gridclip::clipboard::{
    copy_range, fill_rows, serialize_with_delimiter, GridClipboard, MemoryClipboard, PasteGuard,
    PasteSummary, PasteTarget,
};
use gridclip::config::GridClipConfig;
use gridclip::table::{load_table, save_table, Table};

fn main() -> Result<()> {
    gridclip::tracing::init();

    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => GridClipConfig::load_from(path),
        None => GridClipConfig::load(),
    };
    config.locked_columns.extend(args.locked.iter().cloned());

    run(args.command, &config)
}

fn run(command: Command, config: &GridClipConfig) -> Result<()> {
    let mut table = load(command.file(), config)?;
    let output = command.output_file().map(Path::to_path_buf);

    match command {
        Command::Copy { range, stdout, .. } => {
            if stdout {
                let text = serialize_with_delimiter(
                    &range,
                    &table.columns,
                    &table.rows,
                    config.delimiter.char(),
                );
                println!("{}", text);
            } else {
                let mut clipboard = GridClipboard::from_config(config);
                // This process owns the copied text only while it runs
                clipboard.bridge_mut().hold_writes(true);
                if cfg!(target_os = "linux") && clipboard.bridge().is_native() {
                    eprintln!("Serving {} until another program copies (Ctrl-C to stop)", range);
                }
                let text = clipboard.copy(&range, &table.columns, &table.rows);
                eprintln!("Copied {} ({} bytes)", range, text.len());
            }
            return Ok(());
        }
        Command::Paste {
            at,
            range,
            text,
            stdin,
            ..
        } => {
            let target = paste_target(at, range).map_err(anyhow::Error::msg)?;
            let Some(summary) = paste(target, paste_source(text, stdin), &mut table, config)?
            else {
                eprintln!("Nothing to paste");
                return Ok(());
            };
            report("Pasted", &summary);
        }
        Command::CopyRange { from, to, .. } => {
            let Some(rows) = copy_range(&from, &to, &table.columns, &table.rows) else {
                bail!(
                    "Nothing copied: {} and {} differ in size, fall outside the table, or target a locked column",
                    from,
                    to
                );
            };
            table.rows = rows;
            eprintln!("Copied {} to {}", from, to);
        }
        Command::Fill {
            column: key,
            from,
            to,
            ..
        } => {
            let Some(column) = table.column(&key).cloned() else {
                bail!("No column named '{}'", key);
            };
            let summary = fill_rows(&column, from, from.min(to)..=from.max(to), &mut table.rows);
            report("Filled", &summary);
        }
    }

    if let Some(output) = output {
        save_table(&table, &output).with_context(|| format!("Saving {}", output.display()))?;
    }
    Ok(())
}

fn load(path: &Path, config: &GridClipConfig) -> Result<Table> {
    let mut table = load_table(path).with_context(|| format!("Loading {}", path.display()))?;
    config.apply_locks(&mut table.columns);
    Ok(table)
}

fn paste(
    target: PasteTarget,
    source: PasteSource,
    table: &mut Table,
    config: &GridClipConfig,
) -> Result<Option<PasteSummary>> {
    let summary = match source {
        PasteSource::Clipboard => {
            GridClipboard::from_config(config).paste(target, &mut table.rows, &table.columns)
        }
        PasteSource::Text(text) => {
            supplied(text, config).paste(target, &mut table.rows, &table.columns)
        }
        PasteSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Reading standard input")?;
            // Drop the line break shells append to piped text
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            supplied(text, config).paste(target, &mut table.rows, &table.columns)
        }
    };
    Ok(summary)
}

/// Clipboard front end preloaded with text given on the command line
fn supplied(text: String, config: &GridClipConfig) -> GridClipboard<MemoryClipboard> {
    let guard = PasteGuard::new(Duration::from_millis(config.paste_debounce_ms));
    GridClipboard::new(MemoryClipboard::with_text(text), guard, config.delimiter)
}

fn report(verb: &str, summary: &PasteSummary) {
    if summary.aborted {
        eprintln!(
            "{} {} cells, stopped at a locked column ({} skipped)",
            verb, summary.written, summary.skipped
        );
    } else {
        eprintln!(
            "{} {} cells ({} skipped)",
            verb, summary.written, summary.skipped
        );
    }
}
