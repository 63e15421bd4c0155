//! Argument assembler: final child argv in one place.

/// Builder for the argument list handed to the child process.
///
/// Positional arguments always come first and stdin lines after them,
/// whatever order the sources are added in. Repeated calls for the same
/// source append to it.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    positional: Vec<String>,
    lines: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Positional arguments from the command line, already final.
    pub fn with_positional(mut self, positional: Vec<String>) -> Self {
        self.positional.extend(positional);
        self
    }

    /// Arguments read from stdin.
    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Build the final argument list: positional, then lines.
    pub fn build(self) -> Vec<String> {
        let mut args = self.positional;
        args.extend(self.lines);
        args
    }
}

impl Default for ArgAssembler {
    fn default() -> Self {
        Self::new()
    }
}
