// cli.rs - Command-line interface configuration
use anyhow::{ensure, Result};
use clap::Parser;

/// Environment variable consulted when `--scene` is not given
pub const SCENE_ENV: &str = "SCENE";

#[derive(Parser, Debug, Clone)]
#[command(name = "raymarch-camera")]
#[command(about = "Headless driver for raymarching scene cameras", long_about = None)]
pub struct Cli {
    /// Scene catalog (JSON map of scene id to scene descriptor)
    #[arg(long, default_value = "scenes.json")]
    pub scenes: String,

    /// Scene id to run (falls back to $SCENE, then the first scene in the catalog)
    #[arg(long)]
    pub scene: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    pub frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub hz: f32,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Scripted orbit input applied every frame, as "dx,dy,wheel"
    #[arg(long, value_parser = parse_drag, allow_hyphen_values = true)]
    pub drag: Option<(f32, f32, f32)>,

    /// Pace frames against the wall clock and report FPS
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Disable console output of the final camera state
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Requested scene id from the flag or the environment
    pub fn requested_scene(&self) -> Option<String> {
        self.scene.clone().or_else(|| std::env::var(SCENE_ENV).ok())
    }

    /// Reject settings that would produce a degenerate clock or projection
    pub fn validate(&self) -> Result<()> {
        ensure!(self.hz > 0.0, "--hz must be positive, got {}", self.hz);
        ensure!(
            self.width > 0 && self.height > 0,
            "viewport must be non-empty, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

fn parse_drag(value: &str) -> Result<(f32, f32, f32), String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("invalid number '{}': {}", part, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [dx, dy, wheel] => Ok((*dx, *dy, *wheel)),
        _ => Err(format!("expected dx,dy,wheel but got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["raymarch-camera"]);
        assert_eq!(cli.scenes, "scenes.json");
        assert_eq!(cli.frames, 300);
        assert_eq!(cli.hz, 60.0);
        assert_eq!((cli.width, cli.height), (1024, 768));
        assert_eq!(cli.drag, None);
        assert!(!cli.realtime);
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_drag_parsing() {
        let cli = Cli::parse_from(["raymarch-camera", "--drag", "-4,2.5,0"]);
        assert_eq!(cli.drag, Some((-4.0, 2.5, 0.0)));
    }

    #[test]
    fn test_drag_rejects_wrong_arity() {
        assert!(parse_drag("1,2").is_err());
        assert!(parse_drag("a,b,c").is_err());
    }

    #[test]
    fn test_scene_flag_wins() {
        let cli = Cli::parse_from(["raymarch-camera", "--scene", "s3"]);
        assert_eq!(cli.requested_scene(), Some("s3".to_string()));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Cli::parse_from(["raymarch-camera"]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let cli = Cli::parse_from(["raymarch-camera", "--height", "0"]);
        let err = cli.validate().unwrap_err();
        assert!(err.to_string().contains("1024x0"), "got {}", err);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let cli = Cli::parse_from(["raymarch-camera", "--width", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_hz() {
        let cli = Cli::parse_from(["raymarch-camera", "--hz", "0"]);
        assert!(cli.validate().is_err());
    }
}
