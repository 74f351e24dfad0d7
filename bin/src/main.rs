use anyhow::Result;

mod cli;
mod output;
mod pdf;
mod service;

fn main() -> Result<()> {
    cli::run()
}
