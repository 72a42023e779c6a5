use super::*;

/// The six embed kinds the platform recognizes. Generally ignored by
/// clients when rendering, but rejected by the API outside this set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedType {
    #[default]
    Rich,
    Image,
    Video,
    Gifv,
    Link,
    Article,
}

/// Error returned when parsing an [`EmbedType`] from an unrecognized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEmbedType;

impl core::fmt::Display for UnknownEmbedType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown embed type")
    }
}

impl std::error::Error for UnknownEmbedType {}

impl EmbedType {
    pub const ALL: [EmbedType; 6] = [
        EmbedType::Rich,
        EmbedType::Image,
        EmbedType::Video,
        EmbedType::Gifv,
        EmbedType::Link,
        EmbedType::Article,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmbedType::Rich => "rich",
            EmbedType::Image => "image",
            EmbedType::Video => "video",
            EmbedType::Gifv => "gifv",
            EmbedType::Link => "link",
            EmbedType::Article => "article",
        }
    }
}

impl core::str::FromStr for EmbedType {
    type Err = UnknownEmbedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "rich" => EmbedType::Rich,
            "image" => EmbedType::Image,
            "video" => EmbedType::Video,
            "gifv" => EmbedType::Gifv,
            "link" => EmbedType::Link,
            "article" => EmbedType::Article,
            _ => return Err(UnknownEmbedType),
        })
    }
}

/// A richly-formatted message attachment: optional title, description,
/// color, timestamp, author, footer, media, provider, and up to 25 fields.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type", default)]
    pub ty: EmbedType,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub title: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub description: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,

    /// UTC instant, ISO-8601 formatted on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,

    /// Accent color, `0x000000..=0xFFFFFF`
    #[serde(default, skip_serializing_if = "is_zero")]
    pub color: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,

    #[serde(default, skip_serializing_if = "MaybeThinVec::is_empty")]
    pub fields: MaybeThinVec<EmbedField>,
}

impl Embed {
    /// Visit every text field the platform counts against the aggregate
    /// character budget: title, description, author name, footer text, and
    /// each field's name and value.
    pub fn visit_text<F>(&self, mut f: F)
    where
        F: FnMut(&str),
    {
        if let Some(ref title) = self.title {
            f(title);
        }

        if let Some(ref description) = self.description {
            f(description);
        }

        if let Some(ref author) = self.author {
            f(&author.name);
        }

        if let Some(ref footer) = self.footer {
            f(&footer.text);
        }

        for field in &self.fields {
            f(&field.name);
            f(&field.value);
        }
    }

    /// Total character count across all budget-counted text fields.
    pub fn total_text_len(&self) -> usize {
        let mut total = 0;
        self.visit_text(|text| total += text.chars().count());
        total
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub name: SmolStr,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub icon_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub proxy_icon_url: Option<SmolStr>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub text: SmolStr,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub icon_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub proxy_icon_url: Option<SmolStr>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedImage {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub url: SmolStr,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub proxy_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub url: SmolStr,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub proxy_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

/// The platform fills video embeds in on its own and ignores proxy data,
/// so this record carries no proxy URL.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedVideo {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub url: SmolStr,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedProvider {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,
}

impl EmbedProvider {
    pub fn is_none(&self) -> bool {
        is_none_or_empty(&self.name) && is_none_or_empty(&self.url)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub name: SmolStr,

    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub value: SmolStr,

    #[serde(default, skip_serializing_if = "is_false")]
    pub inline: bool,
}

impl EmbedField {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.value.is_empty()
    }
}
