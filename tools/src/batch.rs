//! Reading inputs, running a transform over them and writing the results.
//!
//! Without file arguments the transform reads stdin and writes stdout. With
//! files, each file is one unit of work on the rayon pool; results go to
//! stdout in the order the files were given, or into `--out-dir` under the
//! same file names.

use anyhow::{bail, Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Input and output selection shared by every transform command.
#[derive(Debug, Args)]
pub struct IoArgs {
    /// Input files (default: stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write one output file per input into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Run `transform` over the inputs selected by `io`.
pub fn run<F>(io: &IoArgs, transform: F) -> Result<()>
where
    F: Fn(&str) -> String + Sync,
{
    if io.files.is_empty() {
        if io.out_dir.is_some() {
            bail!("--out-dir needs input files");
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(transform(&text).as_bytes())?;
        return Ok(());
    }

    let outputs = transform_files(&io.files, &transform)?;
    match &io.out_dir {
        Some(dir) => write_to_dir(dir, &io.files, &outputs),
        None => {
            let mut stdout = io::stdout().lock();
            for output in &outputs {
                stdout.write_all(output.as_bytes())?;
            }
            Ok(())
        }
    }
}

/// Transform every file in parallel; results keep the input order.
pub fn transform_files<F>(files: &[PathBuf], transform: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> String + Sync,
{
    files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            debug!(path = %path.display(), bytes = text.len(), "transforming");
            Ok(transform(&text))
        })
        .collect()
}

fn write_to_dir(dir: &Path, files: &[PathBuf], outputs: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for path in files {
        let name = path
            .file_name()
            .with_context(|| format!("{} has no file name", path.display()))?;
        if !seen.insert(name) {
            bail!("two inputs named {:?} would overwrite each other in {}", name, dir.display());
        }
    }

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for (path, output) in files.iter().zip(outputs) {
        // Checked above.
        let Some(name) = path.file_name() else { continue };
        let target = dir.join(name);
        fs::write(&target, output).with_context(|| format!("failed to write {}", target.display()))?;
    }
    info!(files = files.len(), dir = %dir.display(), "outputs written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn outputs_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<PathBuf> = (0..20)
            .map(|i| write(dir.path(), &format!("{i}.txt"), &format!("doc {i}")))
            .collect();
        let outputs = transform_files(&files, |t| t.to_uppercase()).unwrap();
        let expected: Vec<String> = (0..20).map(|i| format!("DOC {i}")).collect();
        assert_eq!(outputs, expected);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let err = transform_files(&[missing], |t| t.to_string()).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn out_dir_mirrors_file_names() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let io = IoArgs {
            files: vec![write(input.path(), "a.txt", "x"), write(input.path(), "b.txt", "y")],
            out_dir: Some(output.path().join("out")),
        };
        run(&io, |t| format!("{t}!")).unwrap();
        let out = output.path().join("out");
        assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "x!");
        assert_eq!(fs::read_to_string(out.join("b.txt")).unwrap(), "y!");
    }

    #[test]
    fn clashing_names_are_rejected() {
        let input = tempfile::tempdir().unwrap();
        fs::create_dir(input.path().join("sub")).unwrap();
        let io = IoArgs {
            files: vec![
                write(input.path(), "a.txt", "x"),
                write(&input.path().join("sub"), "a.txt", "y"),
            ],
            out_dir: Some(input.path().join("out")),
        };
        assert!(run(&io, |t| t.to_string()).is_err());
    }
}
