use std::str::FromStr;

/// Render quality preset passed to the manim CLI.
///
/// The flag and the resolution directory must agree: the engine buckets its
/// output under a directory named for the resolution and framerate the flag
/// selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl RenderQuality {
    /// CLI flag understood by the renderer.
    pub fn flag(&self) -> &str {
        match self {
            Self::Low => "-ql",
            Self::Medium => "-qm",
            Self::High => "-qh",
        }
    }

    /// Resolution-labeled directory the renderer writes under for this flag.
    pub fn dir_name(&self) -> &str {
        match self {
            Self::Low => "480p15",
            Self::Medium => "720p30",
            Self::High => "1080p60",
        }
    }

    /// All available presets.
    pub fn all() -> [RenderQuality; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl FromStr for RenderQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown render quality '{other}' (expected low, medium or high)"
            )),
        }
    }
}
