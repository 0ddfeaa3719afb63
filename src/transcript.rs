// Narration sink for capability operations.
// One heading line, one line per step, then a blank separator line.

use colored::Colorize;
use serde::Deserialize;

const RULE: &str = "-------";

/// Where narration goes when the demo runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptMode {
    #[default]
    Stdout,
    Quiet,
}

#[derive(Debug)]
enum Sink {
    Stdout { color: bool },
    Recording(Vec<String>),
    Quiet,
}

#[derive(Debug)]
pub struct Transcript {
    sink: Sink,
}

impl Transcript {
    pub fn stdout(color: bool) -> Self {
        Self {
            sink: Sink::Stdout { color },
        }
    }

    /// Keeps every line in memory instead of printing it.
    pub fn recording() -> Self {
        Self {
            sink: Sink::Recording(Vec::new()),
        }
    }

    pub fn quiet() -> Self {
        Self { sink: Sink::Quiet }
    }

    pub fn from_mode(mode: TranscriptMode, color: bool) -> Self {
        match mode {
            TranscriptMode::Stdout => Self::stdout(color),
            TranscriptMode::Quiet => Self::quiet(),
        }
    }

    pub fn heading(&mut self, title: &str) {
        let line = format!("{RULE} {title} {RULE}");
        if matches!(self.sink, Sink::Stdout { color: true }) {
            println!("{}", line.cyan().bold());
        } else {
            self.emit(line);
        }
    }

    /// Numbers steps from 1.
    pub fn steps(&mut self, steps: &[&str]) {
        for (i, step) in steps.iter().enumerate() {
            self.emit(format!("Step{}: {}", i + 1, step));
        }
    }

    pub fn end(&mut self) {
        self.emit(String::new());
    }

    /// Heading, steps and the trailing blank line in one call.
    pub fn narrate(&mut self, title: &str, steps: &[&str]) {
        self.heading(title);
        self.steps(steps);
        self.end();
    }

    /// Recorded lines. Always empty unless built with [`Transcript::recording`].
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Recording(lines) => lines,
            _ => &[],
        }
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        match &mut self.sink {
            Sink::Recording(lines) => std::mem::take(lines),
            _ => Vec::new(),
        }
    }

    fn emit(&mut self, line: String) {
        match &mut self.sink {
            Sink::Stdout { .. } => println!("{line}"),
            Sink::Recording(lines) => lines.push(line),
            Sink::Quiet => {}
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::stdout(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrate_shape() {
        let mut transcript = Transcript::recording();
        transcript.narrate("Folding Process", &["Folding"]);
        assert_eq!(
            transcript.lines(),
            &["------- Folding Process -------", "Step1: Folding", ""]
        );
    }

    #[test]
    fn test_heading_without_steps() {
        let mut transcript = Transcript::recording();
        transcript.narrate("Storing data on SSD", &[]);
        assert_eq!(transcript.lines().len(), 2);
        assert_eq!(transcript.lines()[1], "");
    }

    #[test]
    fn test_take_lines_drains() {
        let mut transcript = Transcript::recording();
        transcript.end();
        assert_eq!(transcript.take_lines(), vec![String::new()]);
        assert!(transcript.lines().is_empty());
    }

    #[test]
    fn test_quiet_records_nothing() {
        let mut transcript = Transcript::from_mode(TranscriptMode::Quiet, true);
        transcript.narrate("Anything", &["a", "b"]);
        assert!(transcript.lines().is_empty());
        assert!(transcript.take_lines().is_empty());
    }
}
