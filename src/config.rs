use typed_builder::TypedBuilder;

pub const DEFAULT_MESSAGE: &str = "CRYPTOGRAPHYISCOOL";
pub const DEFAULT_KEY: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    #[builder(default = DEFAULT_MESSAGE.to_string(), setter(into))]
    pub message: String,
    #[builder(default = DEFAULT_KEY)]
    pub key: i64,
    /// Uppercase the message and drop non-letters before encoding.
    #[builder(default)]
    pub normalize: bool,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::builder().build()
    }
}
