use crate::config::toml_config::TomlConfig;
use crate::core::SettingsProvider;
use crate::domain::model::{AspectRatio, ExperimentSettings};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tryon")]
#[command(about = "Compose a virtual try-on request from a person photo and a garment photo")]
pub struct CliConfig {
    #[arg(long, help = "URI or path of the full-body person photo")]
    pub person: Option<String>,

    #[arg(long, help = "URI or path of the garment photo")]
    pub garment: Option<String>,

    #[arg(long, value_parser = parse_aspect_ratio, help = "Output ratio: 3:4, 1:1 or 16:9")]
    pub aspect_ratio: Option<AspectRatio>,

    #[arg(long, help = "Let the model change the body pose")]
    pub no_pose_protection: bool,

    #[arg(long, help = "TOML file with experiment defaults and picker limits")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_aspect_ratio(value: &str) -> Result<AspectRatio, String> {
    value.parse().map_err(|e: crate::utils::error::TryOnError| e.to_string())
}

impl CliConfig {
    /// Flags win over the file, the file wins over built-in defaults.
    pub fn experiment_settings(&self, file: &TomlConfig) -> ExperimentSettings {
        let mut settings = file.experiment_defaults();
        if let Some(ratio) = self.aspect_ratio {
            settings.aspect_ratio = ratio;
        }
        if self.no_pose_protection {
            settings.pose_protection = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "tryon",
            "--person",
            "p1.jpg",
            "--aspect-ratio",
            "1:1",
            "--no-pose-protection",
        ]);
        assert_eq!(cli.person.as_deref(), Some("p1.jpg"));
        assert_eq!(cli.garment, None);
        assert_eq!(cli.aspect_ratio, Some(AspectRatio::OneByOne));
        assert!(cli.no_pose_protection);
    }

    #[test]
    fn test_rejects_unknown_ratio() {
        assert!(CliConfig::try_parse_from(["tryon", "--aspect-ratio", "21:9"]).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[experiment]\npose_protection = true\naspect_ratio = \"16:9\"\n",
        )
        .unwrap();

        let cli = CliConfig::parse_from(["tryon", "--no-pose-protection"]);
        let settings = cli.experiment_settings(&file);
        assert!(!settings.pose_protection);
        assert_eq!(settings.aspect_ratio, AspectRatio::SixteenByNine);

        let cli = CliConfig::parse_from(["tryon", "--aspect-ratio", "3:4"]);
        assert_eq!(cli.experiment_settings(&file).aspect_ratio, AspectRatio::ThreeByFour);
    }
}
