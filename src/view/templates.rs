use serde::Serialize;
use thiserror::Error;

const PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("tile URL template `{template}` has no `{placeholder}` placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },
}

/// XYZ tile URL with `{z}`, `{x}` and `{y}` placeholders.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TileUrlTemplate(String);

impl TileUrlTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        for placeholder in PLACEHOLDERS {
            if !template.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder {
                    template: template.to_string(),
                    placeholder,
                });
            }
        }
        Ok(Self(template.to_string()))
    }

    pub fn expand(&self, z: u32, x: u32, y: u32) -> String {
        self.0
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}
