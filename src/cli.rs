//! CLI argument parsing with clap.

use clap::Parser;

/// AI image generation CLI - prompt-to-image via the Gemini API.
#[derive(Parser, Debug)]
#[command(name = "lumina", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Visual style (e.g., Realistic, Anime, "Digital Art").
    #[arg(short, long)]
    pub style: Option<String>,

    /// Aspect ratio (e.g., 1:1, 16:9, 9:16).
    #[arg(short, long)]
    pub aspect_ratio: Option<String>,

    /// Model identifier override.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output file path (download filename is generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_prompt() {
        let cli = Cli::parse_from(["lumina", "a cat"]);
        assert_eq!(cli.prompt.as_deref(), Some("a cat"));
        assert!(cli.prompt_file.is_none());
        assert_eq!(cli.resolve_prompt().unwrap(), "a cat");
    }

    #[test]
    fn prompt_file_flag() {
        let dir = std::env::temp_dir().join("lumina_cli_pf_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.txt");
        std::fs::write(&path, "prompt from file").unwrap();

        let cli = Cli::parse_from(["lumina", "-p", path.to_str().unwrap()]);
        assert!(cli.prompt.is_none());
        assert!(cli.prompt_file.is_some());
        assert_eq!(cli.resolve_prompt().unwrap(), "prompt from file");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["lumina", "a cat"]);
        assert!(cli.style.is_none());
        assert!(cli.aspect_ratio.is_none());
        assert!(cli.model.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "lumina",
            "-s",
            "Anime",
            "-a",
            "16:9",
            "-m",
            "gemini-3-pro-image-preview",
            "-o",
            "out.png",
            "-v",
            "a landscape",
        ]);
        assert_eq!(cli.style.as_deref(), Some("Anime"));
        assert_eq!(cli.aspect_ratio.as_deref(), Some("16:9"));
        assert_eq!(cli.model.as_deref(), Some("gemini-3-pro-image-preview"));
        assert_eq!(cli.output.as_deref(), Some("out.png"));
        assert!(cli.verbose);
        assert_eq!(cli.prompt.as_deref(), Some("a landscape"));
    }

    #[test]
    fn no_prompt_errors() {
        let cli = Cli::parse_from(["lumina"]);
        assert!(cli.resolve_prompt().is_err());
    }
}
