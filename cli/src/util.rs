use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;

pub fn replace_homedir_to_tilde(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Some(home_dir) = ::dirs::home_dir() else {
        return path
    };
    path.strip_prefix(home_dir)
        .map(|path| Path::new("~").join(path))
        .unwrap_or(path)
}

/// Prints `x` as pretty JSON or with its `Display` rendering.
pub fn print_one<T: Serialize + Display>(x: &T, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(io::stdout(), x)?;
        println!();
    } else {
        println!("{}", x);
    }
    Ok(())
}

pub fn print_list<T: Serialize + Display>(xs: &[T], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(io::stdout(), xs)?;
        println!();
        return Ok(());
    }
    for x in xs {
        println!("{}", x);
    }
    Ok(())
}
