use colored::Colorize;

/// Dependency injection interface for diagnostic output.
///
/// The read path emits path-resolution logs and directory listings through
/// this trait so tests can capture or silence them. Production code uses
/// [`ConsoleReporter`].
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Real implementation printing to stdout/stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

#[cfg(not(tarpaulin_include))]
impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }
}
