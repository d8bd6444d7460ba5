//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Which ordering strategy is applied to a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortVariant {
    /// Ordinal comparison of the line text
    Lexicographic,
    /// Leading integer value of each line (`i64`)
    Integer,
    /// Leading decimal value with `,` as decimal separator
    DecimalComma,
    /// Leading decimal value with `.` as decimal separator
    DecimalDot,
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortVariant {
    pub const ALL: [SortVariant; 4] = [
        SortVariant::Lexicographic,
        SortVariant::Integer,
        SortVariant::DecimalComma,
        SortVariant::DecimalDot,
    ];
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    /// Map a GNU-style `--reverse` flag to an order
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Main configuration structure for a sort run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Ordering strategy
    pub variant: SortVariant,
    /// Ascending or descending
    pub order: SortOrder,
    /// Use NUL instead of newline as line terminator
    pub zero_terminated: bool,
    /// Output file path
    pub output_file: Option<String>,
    /// Files to read from (if not specified, use stdin)
    pub input_files: Vec<String>,
    /// Verbose diagnostics on stderr
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            variant: SortVariant::Lexicographic,
            order: SortOrder::Ascending,
            zero_terminated: false,
            output_file: None,
            input_files: Vec::new(),
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: SortVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_input_files(mut self, files: Vec<String>) -> Self {
        self.input_files = files;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if let Some(output) = &self.output_file {
            if output.is_empty() {
                return Err(SortError::parse_error("empty output file name"));
            }
        }

        if self.input_files.iter().any(|f| f.is_empty()) {
            return Err(SortError::parse_error("empty input file name"));
        }

        Ok(())
    }

    /// Line terminator byte for reading and writing
    pub fn line_terminator(&self) -> u8 {
        if self.zero_terminated {
            b'\0'
        } else {
            b'\n'
        }
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_files.is_empty() || (self.input_files.len() == 1 && self.input_files[0] == "-")
    }
}

impl FromStr for SortVariant {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "text" | "default" => Ok(SortVariant::Lexicographic),
            "integer" | "int" | "i" => Ok(SortVariant::Integer),
            "decimal-comma" | "comma" | "c" => Ok(SortVariant::DecimalComma),
            "decimal-dot" | "dot" | "d" => Ok(SortVariant::DecimalDot),
            _ => Err(SortError::parse_error(&format!("unknown sort variant: {s}"))),
        }
    }
}

impl std::fmt::Display for SortVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortVariant::Lexicographic => "lexicographic",
            SortVariant::Integer => "integer",
            SortVariant::DecimalComma => "decimal-comma",
            SortVariant::DecimalDot => "decimal-dot",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn variant(mut self, variant: SortVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Sort in descending order
    pub fn reverse(mut self) -> Self {
        self.config.order = SortOrder::Descending;
        self
    }

    pub fn zero_terminated(mut self) -> Self {
        self.config.zero_terminated = true;
        self
    }

    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    pub fn input_files(mut self, files: Vec<String>) -> Self {
        self.config.input_files = files;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset configurations for common use cases
pub mod presets {
    use super::*;

    pub fn integer() -> SortConfig {
        SortConfig::new().with_variant(SortVariant::Integer)
    }

    pub fn decimal_comma() -> SortConfig {
        SortConfig::new().with_variant(SortVariant::DecimalComma)
    }

    pub fn decimal_dot() -> SortConfig {
        SortConfig::new().with_variant(SortVariant::DecimalDot)
    }

    pub fn reverse() -> SortConfig {
        SortConfig::new().with_order(SortOrder::Descending)
    }
}
