use crate::ids::UserId;

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    pub id: UserId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photo_url: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            photo_url: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}
