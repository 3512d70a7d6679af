//! Style and aspect-ratio options, and prompt augmentation.

use std::fmt;
use std::str::FromStr;

/// Visual style applied to a generation request.
///
/// The label of the selected style is spliced verbatim into the augmented
/// prompt, so the spelling here is part of the request contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Photorealistic rendering.
    Realistic,
    /// Japanese animation style.
    Anime,
    /// Digital illustration.
    DigitalArt,
    /// Classical oil painting.
    OilPainting,
    /// Watercolor painting.
    Watercolor,
    /// Neon-lit futuristic style.
    Cyberpunk,
    /// Fantasy concept art.
    Fantasy,
    /// Pencil sketch.
    Sketch,
}

/// All selectable styles, in menu order.
pub const ALL_STYLES: &[StyleTag] = &[
    StyleTag::Realistic,
    StyleTag::Anime,
    StyleTag::DigitalArt,
    StyleTag::OilPainting,
    StyleTag::Watercolor,
    StyleTag::Cyberpunk,
    StyleTag::Fantasy,
    StyleTag::Sketch,
];

impl StyleTag {
    /// Human-readable label, as it appears inside the augmented prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Anime => "Anime",
            Self::DigitalArt => "Digital Art",
            Self::OilPainting => "Oil Painting",
            Self::Watercolor => "Watercolor",
            Self::Cyberpunk => "Cyberpunk",
            Self::Fantasy => "Fantasy",
            Self::Sketch => "Sketch",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleTag {
    type Err = String;

    /// Accepts the display label case-insensitively, with spaces, hyphens,
    /// or underscores between words (`"Digital Art"`, `"digital-art"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "realistic" => Ok(Self::Realistic),
            "anime" => Ok(Self::Anime),
            "digitalart" => Ok(Self::DigitalArt),
            "oilpainting" => Ok(Self::OilPainting),
            "watercolor" => Ok(Self::Watercolor),
            "cyberpunk" => Ok(Self::Cyberpunk),
            "fantasy" => Ok(Self::Fantasy),
            "sketch" => Ok(Self::Sketch),
            _ => {
                let valid: Vec<&str> = ALL_STYLES.iter().map(|s| s.label()).collect();
                Err(format!("Unsupported style '{s}'. Valid: {valid:?}"))
            }
        }
    }
}

/// Shape hint for the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 1:1.
    Square,
    /// 16:9.
    Widescreen,
    /// 9:16.
    Vertical,
    /// 4:3.
    Landscape,
    /// 3:4.
    Portrait,
}

/// All selectable aspect ratios, in menu order.
pub const ALL_ASPECT_RATIOS: &[AspectRatio] = &[
    AspectRatio::Square,
    AspectRatio::Widescreen,
    AspectRatio::Vertical,
    AspectRatio::Landscape,
    AspectRatio::Portrait,
];

impl AspectRatio {
    /// The ratio string passed to the API as the image-shape hint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Widescreen => "16:9",
            Self::Vertical => "9:16",
            Self::Landscape => "4:3",
            Self::Portrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(Self::Square),
            "16:9" => Ok(Self::Widescreen),
            "9:16" => Ok(Self::Vertical),
            "4:3" => Ok(Self::Landscape),
            "3:4" => Ok(Self::Portrait),
            _ => {
                let valid: Vec<&str> = ALL_ASPECT_RATIOS.iter().map(|r| r.as_str()).collect();
                Err(format!("Unsupported aspect ratio '{s}'. Valid: {valid:?}"))
            }
        }
    }
}

/// Compose the augmented prompt sent to the model.
///
/// The suffix wording is fixed; the backing model's output distribution is
/// tuned against exactly this phrasing.
#[must_use]
pub fn augment_prompt(prompt: &str, style: StyleTag) -> String {
    format!("{prompt}, in {} style, high quality, detailed, 8k resolution", style.label())
}
