//! Read-Evaluate-Print loop. A thin collaborator around [`crate::evaluate`]
//! and [`crate::object::inspect`] — it owns no interpreter state beyond the
//! one shared [`Environment`] that lets `let` bindings persist across lines.
use std::io::{self, BufRead, Write};

use crate::environment::Environment;
use crate::object::{inspect, Object};

pub const PROMPT: &str = ">> ";

/// Run the REPL over `input`/`output` until an empty line (EOF) is read.
pub fn start(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.is_empty() {
            break;
        }

        let mut parser = crate::parser::Parser::from_source(&line);
        let program = parser.parse_program();

        if !parser.errors.is_empty() {
            for err in &parser.errors {
                writeln!(output, "\t{err}")?;
            }
            continue;
        }

        let result = crate::evaluator::eval_program(&program, &env);
        writeln!(output, "{}", inspect(&result))?;
    }

    Ok(())
}

/// Convenience for callers that just want the final value of one line,
/// without standing up a loop (used by the CLI's single-shot file mode).
pub fn eval_once(source: &str) -> Object {
    let env = Environment::new();
    crate::evaluate(source, &env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_persist_across_lines() {
        let input = b"let x = 5;\nx + 1\n\n".as_slice();
        let mut output = Vec::new();
        start(input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("null"));
        assert!(rendered.contains("6"));
    }

    #[test]
    fn parser_errors_are_reported_with_tab_prefix_and_do_not_crash_the_loop() {
        let input = b"let x 5;\n1 + 1\n\n".as_slice();
        let mut output = Vec::new();
        start(input, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains('\t'));
        assert!(rendered.contains('2'));
    }
}
