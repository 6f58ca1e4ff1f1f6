//! Small filesystem, download, and table helpers shared by the commands.

pub mod table;
pub mod verbosity;

use color_eyre::eyre::{eyre, ContextCompat, Report, Result, WrapErr};
use color_eyre::Help;
use std::fmt::Debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Returns the final extension of a path as a string.
pub fn path_to_ext<P>(path: &P) -> Result<String, Report>
where
    P: AsRef<Path> + Debug,
{
    let ext = path
        .as_ref()
        .extension()
        .wrap_err_with(|| format!("Failed to get file extension: {path:?}"))?
        .to_str()
        .wrap_err_with(|| format!("Failed to convert file extension to str: {path:?}"))?;

    Ok(ext.to_string())
}

/// Returns the column delimiter for a table file extension.
///
/// - `.tsv` => `\t`
/// - `.csv` => `,`
pub fn get_delimiter<P>(path: &P) -> Result<char, Report>
where
    P: AsRef<Path> + Debug,
{
    match path_to_ext(path)?.as_str() {
        "tsv" => Ok('\t'),
        "csv" => Ok(','),
        _ext => Err(eyre!("Unknown table extension: {_ext:?}").suggestion("Options: tsv or csv.")),
    }
}

/// Reads a file to a string, transparently decompressing `.zst`.
///
/// Network snapshots can be large, so the portal serves them
/// zstd-compressed; everything downstream only ever sees the decoded text.
pub fn read_to_string<P>(path: &P) -> Result<String, Report>
where
    P: AsRef<Path> + Debug,
{
    match path_to_ext(path)?.as_str() {
        "zst" => {
            let reader = std::fs::File::open(path.as_ref())
                .wrap_err_with(|| format!("Failed to open: {path:?}"))?;
            let mut decoder = zstd::stream::read::Decoder::new(reader)
                .wrap_err_with(|| format!("Failed to decode: {path:?}"))?;
            let mut buffer = String::new();
            decoder
                .read_to_string(&mut buffer)
                .wrap_err_with(|| format!("Failed to decompress: {path:?}"))?;
            Ok(buffer)
        }
        _ => std::fs::read_to_string(path.as_ref())
            .wrap_err_with(|| format!("Failed to read file: {path:?}")),
    }
}

/// Downloads a file from a url to a path.
pub async fn download_file<P>(url: &str, output: &P) -> Result<PathBuf, Report>
where
    P: AsRef<Path> + Debug,
{
    let output: PathBuf = output.as_ref().into();

    if let Some(output_dir) = output.parent() {
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir)?;
        }
    }

    let response = reqwest::get(url).await?;
    if response.status() != 200 {
        Err(eyre!("Failed to download: {url:?}")
            .suggestion(format!("Status code: {}", response.status())))?;
    }

    std::fs::write(&output, response.bytes().await?)
        .wrap_err_with(|| format!("Unable to write: {output:?}"))?;

    Ok(output)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_follow_extensions() -> Result<(), Report> {
        assert_eq!(get_delimiter(&"linelist.tsv")?, '\t');
        assert_eq!(get_delimiter(&"linelist.csv")?, ',');
        assert!(get_delimiter(&"linelist.parquet").is_err());
        assert!(get_delimiter(&"linelist").is_err());
        Ok(())
    }

    #[test]
    fn plain_files_read_directly() -> Result<(), Report> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("network.json");
        std::fs::write(&path, "{\"proteins\": []}")?;

        assert_eq!(read_to_string(&path)?, "{\"proteins\": []}");
        Ok(())
    }
}
