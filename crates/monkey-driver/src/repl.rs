//! The read-eval-print loop: one top-level `Environment` persists across
//! iterations so `let`-bindings and function definitions accumulate, exactly
//! as in a REPL session.

use std::io::{self, BufRead, Write};

use monkey_eval::eval_program;
use monkey_lexer::Lexer;
use monkey_object::Environment;
use monkey_parser::Parser;
use tracing::debug;

const PROMPT: &str = ">>> ";

/// Drive the loop until `input` hits end-of-file. Parser errors are printed
/// tab-prefixed, one per line; otherwise the evaluated value's rendering is
/// printed followed by a newline.
pub fn run<R: io::Read, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut reader = io::BufReader::new(input);
    let env = Environment::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse();
        debug!(line_len = line.len(), "lex + parse done");

        if !parser.errors().is_empty() {
            for err in parser.errors() {
                writeln!(output, "\t{err}")?;
            }
            continue;
        }

        let value = eval_program(&program, &env);
        debug!(result_type = value.type_tag(), "eval done");
        writeln!(output, "{value}")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn evaluates_each_line_against_a_shared_environment() {
        let output = run_session("let a = 5;\na + 1;\n");
        assert_eq!(output, format!("{PROMPT}null\n{PROMPT}6\n{PROMPT}"));
    }

    #[test]
    fn reports_parse_errors_tab_prefixed() {
        let output = run_session("let = 5;\n");
        assert!(output.contains("\texpected next token to be IDENT"));
    }

    #[test]
    fn renders_runtime_errors_inline() {
        let output = run_session("5 + true;\n");
        assert_eq!(output, format!("{PROMPT}ERROR: type mismatch: INTEGER + BOOLEAN\n{PROMPT}"));
    }
}
