use anyhow::Result;
use clap::Parser;
use console::style;
use querygen_core::description::{self, Parsed, Stop};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ParseCommand {
    /// Schema description file
    path: PathBuf,
}

impl ParseCommand {
    pub(crate) fn run(self) -> Result<()> {
        let parsed = description::parse_file(&self.path)?;
        print!("{}", render(&parsed));
        Ok(())
    }
}

/// Lists the parsed tables, followed by a note when the parse did not
/// complete.
pub(crate) fn render(parsed: &Parsed) -> String {
    let mut out = String::new();

    for table in &parsed.tables {
        out.push_str(&table.qualified_name());
        out.push('\n');
    }

    match &parsed.stop {
        Stop::Complete => {}
        Stop::Truncated { state, scope } => {
            let note = format!("input ended in {state:?} state at depth {scope}");
            out.push_str(&format!("{}\n", style(note).yellow()));
        }
        Stop::Aborted(abort) => {
            let note = format!(
                "stopped at line {}, column {}: unexpected {:?}",
                abort.line, abort.column, abort.ch
            );
            out.push_str(&format!("{}\n", style(note).red()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_tables_then_abort_position() {
        console::set_colors_enabled(false);

        let parsed = description::parse("\"a.b\" : {}\n\"c.d\" : {} ,");
        assert_eq!(
            render(&parsed),
            "a.b\nc.d\nstopped at line 2, column 12: unexpected ','\n"
        );
    }

    #[test]
    fn complete_parse_lists_only_tables() {
        let parsed = description::parse("\"a.b\" : {}");
        assert_eq!(render(&parsed), "a.b\n");
    }
}
