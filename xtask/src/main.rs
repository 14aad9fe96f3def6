//! Build tasks: man page and shell completion generation.
//!
//! Usage: `cargo run -p xtask -- <task>`

use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for langwrap")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completions into DIR (default: target/dist)
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
    /// Generate the man page into DIR (default: target/dist)
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
    /// Generate both completions and the man page
    Dist {
        /// Output directory
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<(), Error> {
    match Xtask::parse().task {
        Task::Completions { out_dir } => completions(&out_dir),
        Task::Man { out_dir } => man(&out_dir),
        Task::Dist { out_dir } => {
            completions(&out_dir)?;
            man(&out_dir)
        }
    }
}

fn completions(out_dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(out_dir)?;
    let mut cmd = langwrap::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = generate_to(shell, &mut cmd, "langwrap", out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man(out_dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(out_dir)?;
    let cmd = langwrap::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join("langwrap.1");
    fs::write(&path, buffer)?;
    println!("wrote {}", path.display());
    Ok(())
}
