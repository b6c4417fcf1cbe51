use std::path::PathBuf;

use clap::Parser;
use toltec_repeat_core::api::AppConfig;

/// Run the KIDs reduction tool over every matching TolTEC repeat file.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Inserted after the network digit: `*toltec*[0-9]<SUFFIX>*.nc`.
    /// Without it the pattern is `*toltec*[0-9].nc`.
    #[arg(allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Data root searched recursively.
    #[arg(long)]
    pub root: Option<String>,

    /// Reduction tool (file, or directory holding `reduce.sh`).
    #[arg(long)]
    pub tool: Option<String>,

    /// Placeholder output name passed to the tool.
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List matches and the commands that would run, without running them.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    pub follow_links: bool,
}

impl Args {
    /// Flags win over config file and environment.
    pub fn apply_overrides(&self, cfg: &mut AppConfig) {
        if let Some(root) = &self.root {
            cfg.select.root = root.clone();
        }
        if let Some(tool) = &self.tool {
            cfg.tool.bin = tool.clone();
        }
        if let Some(output) = &self.output {
            cfg.tool.output = output.clone();
        }
        if self.follow_links {
            cfg.select.follow_links = true;
        }
    }
}
