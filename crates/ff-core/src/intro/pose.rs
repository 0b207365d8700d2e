//! Declarative transforms the render surface applies for each intro stage.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::outfit::{Transform, Vec3};

use super::stage::AnimationStage;

/// Wordmark spelled out by the letter fragments.
pub const WORDMARK: &str = "FashionFOT VR";

const GLYPH_START_X: f32 = -3.5;
const GLYPH_ADVANCE: f32 = 0.6;
const SPACE_ADVANCE: f32 = 0.3;
/// Glyphs before this index use the primary colour, the rest the accent.
const PRIMARY_GLYPHS: usize = 7;

/// Where the garment flies off to once it fragments.
pub const GARMENT_EXIT: Transform = Transform {
    position: Vec3::new(0.0, 2.0, 0.0),
    rotation: Vec3::new(0.0, 720.0, 0.0),
    scale: Vec3::ZERO,
};

/// Avatar placement during the intro: drops in from above, lands beside the wordmark.
pub fn avatar_transform(stage: AnimationStage) -> Option<Transform> {
    match stage {
        AnimationStage::Avatar => {
            Some(Transform::at(Vec3::new(2.5, 3.0, 0.0)).with_scale(Vec3::splat(0.8)))
        }
        AnimationStage::Complete => Some(Transform::at(Vec3::new(2.5, -0.5, 0.0))),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphPose {
    pub glyph: char,
    pub accent: bool,
    pub transform: Transform,
}

/// Everything the intro shows at one stage. Absent parts are not rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntroPose {
    pub stage: AnimationStage,
    pub garment: Option<Transform>,
    pub glyphs: Vec<GlyphPose>,
    pub avatar: Option<Transform>,
}

/// Resting and scattered glyph positions, fixed for the lifetime of a director.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroLayout {
    home: Vec<(char, Vec3)>,
    scattered: Vec<Vec3>,
}

impl IntroLayout {
    /// Builds the layout; `seed` fixes the scatter so repeated renders agree.
    pub fn new(seed: u64) -> Self {
        let mut home = Vec::new();
        let mut x = GLYPH_START_X;
        for glyph in WORDMARK.chars() {
            if glyph == ' ' {
                x += SPACE_ADVANCE;
            } else {
                home.push((glyph, Vec3::new(x, 0.0, 0.0)));
                x += GLYPH_ADVANCE;
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let scattered = home
            .iter()
            .map(|_| {
                Vec3::new(
                    rng.random_range(-4.0..4.0),
                    rng.random_range(-3.0..3.0),
                    rng.random_range(-2.0..2.0),
                )
            })
            .collect();

        Self { home, scattered }
    }

    pub fn glyph_count(&self) -> usize {
        self.home.len()
    }

    pub fn pose(&self, stage: AnimationStage) -> IntroPose {
        let garment = match stage {
            AnimationStage::Garment => Some(Transform::IDENTITY),
            AnimationStage::Fragment => Some(GARMENT_EXIT),
            _ => None,
        };

        let glyphs = match stage {
            AnimationStage::Idle | AnimationStage::Garment => Vec::new(),
            AnimationStage::Fragment => self.glyphs(|i, _| {
                Transform::at(self.scattered[i])
                    .with_scale(Vec3::splat(0.1))
                    .with_rotation(Vec3::new(360.0, 360.0, 0.0))
            }),
            _ => self.glyphs(|_, home| Transform::at(home)),
        };

        IntroPose {
            stage,
            garment,
            glyphs,
            avatar: avatar_transform(stage),
        }
    }

    fn glyphs(&self, place: impl Fn(usize, Vec3) -> Transform) -> Vec<GlyphPose> {
        self.home
            .iter()
            .enumerate()
            .map(|(i, (glyph, home))| GlyphPose {
                glyph: *glyph,
                accent: i >= PRIMARY_GLYPHS,
                transform: place(i, *home),
            })
            .collect()
    }
}

impl Default for IntroLayout {
    fn default() -> Self {
        Self::new(0x5eed)
    }
}
