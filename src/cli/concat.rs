//! Concat command - merge variable files into the env file.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::{validate_env_file, Config};
use crate::core::env::{self, SourceClass, VariableMapping};
use crate::core::fs::find_files;
use crate::error::Result;

/// Merge `*.secret`, `*.public` and `*.local` in `dir` into the env file.
///
/// Classes are read in that order and files within a class in sorted
/// order; the last definition of a key wins. The env file is replaced
/// wholesale, even when no sources exist.
pub fn execute(dir: &Path, output_name: Option<String>) -> Result<()> {
    let config = Config::load(dir)?;
    let env_path = match output_name {
        Some(name) => {
            validate_env_file(&name)?;
            dir.join(name)
        }
        None => config.env_path(dir),
    };

    let mut mapping = VariableMapping::new();
    let mut sources = 0;
    for class in SourceClass::ALL {
        for file in find_files(dir, class.suffix())? {
            output::dimmed(&format!("reading variables in {}", output::path(file.display())));
            env::load_into(&mut mapping, &file)?;
            sources += 1;
        }
    }

    if sources == 0 {
        output::warn("no variable files found");
    }

    env::write_env_file(&env_path, &mapping)?;
    output::success(&format!(
        "wrote {} variables to {}",
        mapping.len(),
        output::path(env_path.display())
    ));

    info!(sources, variables = mapping.len(), "merged env file");
    Ok(())
}
