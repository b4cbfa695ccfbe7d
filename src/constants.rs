//! Common constants used throughout hbsbake.

/// Data object field that receives environment variables when `--env` is given without a name.
pub const DEFAULT_ENV_FIELD: &str = "env";

/// Suffix stripped when `--strip` is given without a list.
pub const DEFAULT_SUFFIX: &str = ".hbs";

/// Separator between entries of an explicit `--strip` list.
pub const SUFFIX_SEPARATOR: char = ',';
