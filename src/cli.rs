// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::driver::NormalPolicy;
use crate::math::Rgb;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wave-morph")]
#[command(about = "Animated wave-deformed plane", long_about = None)]
pub struct Cli {
    /// Hide the parameter panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Window width in pixels (window starts maximized if unset)
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Surface color as hex, e.g. "#bb77ff"
    #[arg(long)]
    pub color: Option<Rgb>,

    /// Initial wave frequency (1-10)
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Initial wave speed (0-10)
    #[arg(long)]
    pub speed: Option<f32>,

    /// Initial wave amount (0-2)
    #[arg(long)]
    pub amount: Option<f32>,

    /// When to recompute vertex normals
    #[arg(long, value_enum)]
    pub normals: Option<NormalPolicy>,

    /// JSON config file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "wave-morph",
            "--no-ui",
            "--width",
            "640",
            "--color",
            "#112233",
            "--frequency",
            "7",
            "--normals",
            "on-change",
        ])
        .unwrap();

        assert!(cli.no_ui);
        assert_eq!(cli.width, Some(640));
        assert_eq!(cli.height, None);
        assert_eq!(cli.color, Some(Rgb::from_bytes(0x11, 0x22, 0x33)));
        assert_eq!(cli.frequency, Some(7));
        assert_eq!(cli.normals, Some(NormalPolicy::OnChange));
    }

    #[test]
    fn rejects_bad_color() {
        assert!(Cli::try_parse_from(["wave-morph", "--color", "purple"]).is_err());
    }
}
