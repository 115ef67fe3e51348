//! Declarative module configuration documents
//!
//! One JSON document per module. Simple modules describe their fields and
//! columns directly; composite modules additionally carry a `views` object
//! whose values are themselves module configurations.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Configuration document of a single module (or of one of its views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Page title shown in the template header
    pub title: String,
    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon name understood by the frontend icon set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Fields used by forms and details
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Table columns, in display order
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    /// Field the template's search box matches against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_field: Option<String>,
    /// Named sub-views, in declaration order (composite modules only)
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_views",
        deserialize_with = "deserialize_views"
    )]
    pub views: Vec<NamedView>,
}

impl ModuleConfig {
    /// A module is composite when it declares at least one sub-view
    pub fn is_composite(&self) -> bool {
        !self.views.is_empty()
    }

    pub fn view(&self, id: &str) -> Option<&ModuleConfig> {
        self.views.iter().find(|v| v.id == id).map(|v| &v.config)
    }

    pub fn has_view(&self, id: &str) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    /// First declared view id
    pub fn first_view_id(&self) -> Option<&str> {
        self.views.first().map(|v| v.id.as_str())
    }

    pub fn view_ids(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|v| v.id.as_str())
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// A sub-view of a composite module
#[derive(Debug, Clone, PartialEq)]
pub struct NamedView {
    pub id: String,
    pub config: ModuleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Allowed values for `select` fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Money,
    Date,
    Select,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Record field rendered in this column
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub format: ColumnFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// How the template renders a cell value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFormat {
    #[default]
    Text,
    Integer,
    Money,
    Date,
    /// Rendered as a badge
    Status,
}

// `views` is a JSON object; declaration order matters, so it is collected
// into a Vec instead of a map.
fn deserialize_views<'de, D>(deserializer: D) -> Result<Vec<NamedView>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ViewsVisitor;

    impl<'de> Visitor<'de> for ViewsVisitor {
        type Value = Vec<NamedView>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of named module views")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut views = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, config)) = map.next_entry::<String, ModuleConfig>()? {
                views.push(NamedView { id, config });
            }
            Ok(views)
        }
    }

    deserializer.deserialize_map(ViewsVisitor)
}

fn serialize_views<S>(views: &[NamedView], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(views.iter().map(|v| (&v.id, &v.config)))
}
