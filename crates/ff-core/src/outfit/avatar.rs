use serde::{Deserialize, Serialize};

/// Closed set of avatar bodies an outfit can be worn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarVariant {
    #[default]
    Female,
    Male,
}

impl AvatarVariant {
    pub const ALL: [AvatarVariant; 2] = [AvatarVariant::Female, AvatarVariant::Male];

    pub fn other(self) -> Self {
        match self {
            AvatarVariant::Female => AvatarVariant::Male,
            AvatarVariant::Male => AvatarVariant::Female,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AvatarVariant::Female => "female",
            AvatarVariant::Male => "male",
        }
    }

    pub fn profile(self) -> &'static AvatarProfile {
        match self {
            AvatarVariant::Female => &AVATAR_PROFILES[0],
            AvatarVariant::Male => &AVATAR_PROFILES[1],
        }
    }
}

impl std::fmt::Display for AvatarVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of the model shown for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub model_url: &'static str,
    pub variant: AvatarVariant,
}

pub static AVATAR_PROFILES: [AvatarProfile; 2] = [
    AvatarProfile {
        id: "avatar1",
        name: "Default Female",
        model_url: "/avatars/avatar1.glb",
        variant: AvatarVariant::Female,
    },
    AvatarProfile {
        id: "avatar2",
        name: "Default Male",
        model_url: "/avatars/avatar2.glb",
        variant: AvatarVariant::Male,
    },
];

/// Looks a profile up by its id (`"avatar1"`, `"avatar2"`).
pub fn profile_by_id(id: &str) -> Option<&'static AvatarProfile> {
    AVATAR_PROFILES.iter().find(|p| p.id == id)
}
