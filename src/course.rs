use std::fmt::{self, Display};

use maud::Render;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Render for CourseId {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        CourseId(value)
    }
}

/// One course as shown on a card. Everything other than `id` is display data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: CourseId,

    pub subject_code: String,
    pub course_code: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub credits: Option<f32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Course {
    pub fn code(&self) -> String {
        format!("{} {}", self.subject_code, self.course_code)
    }
}
