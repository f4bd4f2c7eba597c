use std::{path::Path, str::FromStr};

use crate::{
    error::{ConfigError, SchemaError},
    registry::{
        pascal_case, ContentTypeDescriptor, FieldShape, TaxonomyTypeDescriptor, TypeRegistry, DEFAULT_CONTENT_TYPE,
    },
};

/// Schema settings, usually read from a TOML file:
///
/// ```toml
/// default_content_type = "post"
/// introspection = true
/// depth_limit = 16
///
/// [[content_types]]
/// name = "product"
/// description = "Things for sale"
/// meta_fields = ["price", "sku"]
///
/// [[taxonomy_types]]
/// name = "genre"
/// extends = "category"
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Content type used by `content(slug: ...)` when no `contentType` is given.
    pub default_content_type: String,
    pub introspection: bool,
    pub depth_limit: Option<usize>,
    pub complexity_limit: Option<usize>,
    /// Registered after the built-in content types, overriding them on name clashes.
    pub content_types: Vec<ContentTypeConfig>,
    /// Registered after the built-in taxonomy types, overriding them on name clashes.
    pub taxonomy_types: Vec<TaxonomyTypeConfig>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            default_content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            introspection: true,
            depth_limit: None,
            complexity_limit: None,
            content_types: Vec::new(),
            taxonomy_types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentTypeConfig {
    pub name: String,
    /// Defaults to `name` in PascalCase.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Defaults to the description of the content type being overridden, if any.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hierarchical: bool,
    #[serde(default)]
    pub meta_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyTypeConfig {
    pub name: String,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Reuse the field shape of an already registered taxonomy type.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub hierarchical: bool,
}

impl SchemaConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        contents.parse()
    }

    pub(crate) fn apply(&self, registry: &mut TypeRegistry) -> Result<(), SchemaError> {
        for content_type in &self.content_types {
            let description = content_type
                .description
                .clone()
                .or_else(|| {
                    registry
                        .content_type(&content_type.name)
                        .map(|existing| existing.description.clone())
                })
                .unwrap_or_default();

            let shape = FieldShape {
                hierarchical: content_type.hierarchical,
                meta_fields: content_type.meta_fields.clone(),
            };

            let descriptor = ContentTypeDescriptor::new(&content_type.name, description)
                .with_type_name(type_name(&content_type.name, content_type.type_name.as_deref()))
                .with_shape(shape);

            registry.register_content_type(descriptor);
        }

        for taxonomy_type in &self.taxonomy_types {
            let existing = registry.taxonomy_type(&taxonomy_type.name);

            let description = taxonomy_type
                .description
                .clone()
                .or_else(|| existing.map(|existing| existing.description.clone()))
                .unwrap_or_default();

            let shape = match &taxonomy_type.extends {
                Some(base) => {
                    let base = registry
                        .taxonomy_type(base)
                        .ok_or_else(|| SchemaError::UnknownBaseTaxonomy {
                            name: taxonomy_type.name.clone(),
                            extends: base.clone(),
                        })?;

                    base.shape.clone()
                }
                None => FieldShape {
                    hierarchical: taxonomy_type.hierarchical,
                    meta_fields: Vec::new(),
                },
            };

            let descriptor = TaxonomyTypeDescriptor::new(&taxonomy_type.name, description)
                .with_type_name(type_name(&taxonomy_type.name, taxonomy_type.type_name.as_deref()))
                .with_shape(shape);

            registry.register_taxonomy_type(descriptor);
        }

        Ok(())
    }
}

impl FromStr for SchemaConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn type_name(name: &str, configured: Option<&str>) -> String {
    configured.map(str::to_owned).unwrap_or_else(|| pascal_case(name))
}
