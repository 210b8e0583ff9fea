//! `quire render` — Print a demo edit view to stdout.

use clap::ValueEnum;
use quire_config::AppConfig;
use quire_core::{Editable, Role};
use quire_editor::Editor;
use quire_gateway::demo::{Article, Submission};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Plain editable content
    Article,
    /// Externally submitted content awaiting approval
    Submission,
}

pub fn run(kind: Kind, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let editor = Editor::from_config(&config.editor);

    let view = render(&editor, kind, &Role::from(role))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&view)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn render(editor: &Editor, kind: Kind, role: &Role) -> quire_core::Result<Vec<u8>> {
    let content: Box<dyn Editable> = match kind {
        Kind::Article => Box::new(Article::sample(1)),
        Kind::Submission => Box::new(Submission::sample(1)),
    };
    tracing::debug!(?kind, role = %role, "Rendering demo view");
    Ok(content.marshal_editor(editor, role)?.into_bytes())
}
