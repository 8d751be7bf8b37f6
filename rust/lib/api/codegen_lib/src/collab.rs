//! Collaborators plugged into the generator.

use crate::config::GeneratorConfig;

/// Produces the query/mutation block appended to a model's `index.ts`.
pub trait QueriesAndMutations {
    fn generate(&self, model: &str, config: &GeneratorConfig) -> String;
}

/// Contributes nothing; the per-model index only re-exports `./type`.
pub struct NoQueriesAndMutations;

impl QueriesAndMutations for NoQueriesAndMutations {
    fn generate(&self, _model: &str, _config: &GeneratorConfig) -> String {
        String::new()
    }
}

/// Applied to every generated file before it is written.
pub trait Formatter {
    fn format(&self, source: &str) -> String;
}

pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, source: &str) -> String {
        source.to_string()
    }
}

/// Strips trailing whitespace, collapses blank-line runs and ends the file
/// with a single newline.
pub struct Tidy;

impl Formatter for Tidy {
    fn format(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut blank_run = false;
        for line in source.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                if blank_run || out.is_empty() {
                    continue;
                }
                blank_run = true;
            } else {
                blank_run = false;
            }
            out.push_str(line);
            out.push('\n');
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_normalises_whitespace() {
        let src = "\n\nimport x  \n\n\n\nconst a = 1   \n\n";
        assert_eq!(Tidy.format(src), "import x\n\nconst a = 1\n");
    }

    #[test]
    fn tidy_is_idempotent() {
        let once = Tidy.format("a\n\n\nb  \n");
        assert_eq!(Tidy.format(&once), once);
    }

    #[test]
    fn tidy_empty_stays_empty() {
        assert_eq!(Tidy.format(""), "");
        assert_eq!(Tidy.format("\n\n"), "");
    }

    #[test]
    fn passthrough_is_identity() {
        assert_eq!(Passthrough.format("a  \n\n\n"), "a  \n\n\n");
    }
}
