use super::*;

/// A file attached to an outgoing message. Embeds may reference these
/// through `attachment://{filename}` URLs.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: SmolStr,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,
}

/// The slice of an outgoing message that whole-embed validation inspects:
/// body text plus the files available for `attachment://` references.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "SmolStr::is_empty")]
    pub content: SmolStr,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
}

impl Message {
    pub fn has_attachment(&self, filename: &str) -> bool {
        self.attachments.iter().any(|a| a.filename == filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_attachment() {
        let msg = Message {
            attachments: vec![Attachment {
                filename: SmolStr::new("chart.png"),
                url: None,
            }],
            ..Default::default()
        };

        assert!(msg.has_attachment("chart.png"));
        assert!(!msg.has_attachment("other.png"));
    }
}
