//! Inspect command implementation

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use kugiri_core::{BoundaryKind, Text};

use super::segment::KindArg;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Text to inspect (default: read stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Restrict the dump to one boundary kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let content = self.content()?;
        let text = Text::new(content);
        print!("{}", render(&text, self.kind.map(KindArg::to_kind)));
        Ok(())
    }

    fn content(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

/// Render the per-scalar break class table.
fn render(text: &Text, kind: Option<BoundaryKind>) -> String {
    let kinds: Vec<BoundaryKind> = match kind {
        Some(k) => vec![k],
        None => BoundaryKind::ALL.to_vec(),
    };

    let mut out = String::new();
    let mut header = format!("{:<6} {:<14}", "index", "scalar");
    for k in &kinds {
        header.push_str(&format!(" {:<22}", k.as_str()));
    }
    push_row(&mut out, &header);

    for (index, c) in text.as_str().chars().enumerate() {
        let mut row = format!("{:<6} {:<14}", index, format!("U+{:04X} {:?}", c as u32, c));
        for k in &kinds {
            let name = match text.classify(*k, index) {
                Some(class) => class.name(),
                None => "-",
            };
            row.push_str(&format!(" {:<22}", name));
        }
        push_row(&mut out, &row);
    }
    out
}

fn push_row(out: &mut String, row: &str) {
    out.push_str(row.trim_end());
    out.push('\n');
}
