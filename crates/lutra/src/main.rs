mod db;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use db::{File, check_file};
use lutra_ast::FormatOptions;
use lutra_errors::{Diagnostic, Renderer};
use salsa::DatabaseImpl;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Parse a file and report diagnostics.
    Check { path: Utf8PathBuf },
    /// Parse a file and print its reconstructed source.
    Format {
        path: Utf8PathBuf,
        /// Re-wrap comment lines longer than this width.
        #[arg(long)]
        wrap_comments: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Check { path } => {
            let db = DatabaseImpl::default();
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;

            let renderer = Renderer::styled();
            let file = File::new(&db, path, text);
            let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

            let path = file.path(&db).as_str();
            let text = file.text(&db);

            for diagnostic in diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path, text));
            }
        }
        Options::Format { path, wrap_comments } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;

            let parsed = lutra_parse::module(&text);
            print!("{}", parsed.reconstruct(&FormatOptions { wrap_comments }));
        }
    }

    Ok(())
}
