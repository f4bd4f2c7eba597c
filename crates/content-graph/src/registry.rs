//! The content-type and taxonomy-type tables the schema is generated from.
//!
//! Both tables are keyed by the discriminator the host stores on its records (`post`, `category`,
//! ...). Each descriptor also names the GraphQL object type generated for it.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{error::SchemaError, types};

pub const DEFAULT_CONTENT_TYPE: &str = "post";

/// Extra fields a descriptor contributes on top of the fields shared by its interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldShape {
    /// Adds a `parent` field pointing at a record of the same kind.
    pub hierarchical: bool,
    /// Custom metadata keys exposed as nullable `String` fields of the same name.
    pub meta_fields: Vec<String>,
}

impl FieldShape {
    pub fn flat() -> Self {
        Self::default()
    }

    pub fn hierarchical() -> Self {
        Self {
            hierarchical: true,
            ..Default::default()
        }
    }

    pub fn with_meta_field(mut self, name: impl Into<String>) -> Self {
        self.meta_fields.push(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeDescriptor {
    pub name: String,
    pub type_name: String,
    pub description: String,
    pub shape: FieldShape,
}

impl ContentTypeDescriptor {
    /// A flat descriptor whose GraphQL type name is `name` in PascalCase.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            type_name: pascal_case(&name),
            name,
            description: description.into(),
            shape: FieldShape::flat(),
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyTypeDescriptor {
    pub name: String,
    pub type_name: String,
    pub description: String,
    pub shape: FieldShape,
}

impl TaxonomyTypeDescriptor {
    /// A flat descriptor whose GraphQL type name is `name` in PascalCase.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            type_name: pascal_case(&name),
            name,
            description: description.into(),
            shape: FieldShape::flat(),
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }

    /// A new taxonomy sharing this one's field shape, differing only by name and description.
    pub fn specialize(&self, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description).with_shape(self.shape.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    content_types: IndexMap<String, ContentTypeDescriptor>,
    taxonomy_types: IndexMap<String, TaxonomyTypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `post` and `page`; `category`, `tag` and `post_format`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_content_type(ContentTypeDescriptor::new(
            "post",
            "Posts are dated entries, listed in reverse chronological order.",
        ));
        registry.register_content_type(
            ContentTypeDescriptor::new(
                "page",
                "Pages are static content outside of the dated flow of posts. They can be nested under a parent page.",
            )
            .with_shape(FieldShape::hierarchical()),
        );

        let tag = TaxonomyTypeDescriptor::new("tag", "Tags are free-form keywords attached to posts.");
        let category = tag.specialize(
            "category",
            "The 'category' taxonomy lets you group posts together by sorting them into various categories.",
        );
        let post_format = tag.specialize(
            "post_format",
            "The 'post_format' taxonomy is a piece of meta information a theme can use to customize the presentation of a post.",
        );

        registry.register_taxonomy_type(category);
        registry.register_taxonomy_type(tag);
        registry.register_taxonomy_type(post_format);

        registry
    }

    /// Registers `descriptor` under its name, returning the descriptor it replaced.
    pub fn register_content_type(&mut self, descriptor: ContentTypeDescriptor) -> Option<ContentTypeDescriptor> {
        self.content_types.insert(descriptor.name.clone(), descriptor)
    }

    /// Registers `descriptor` under its name, returning the descriptor it replaced.
    pub fn register_taxonomy_type(&mut self, descriptor: TaxonomyTypeDescriptor) -> Option<TaxonomyTypeDescriptor> {
        self.taxonomy_types.insert(descriptor.name.clone(), descriptor)
    }

    pub fn remove_content_type(&mut self, name: &str) -> Option<ContentTypeDescriptor> {
        self.content_types.shift_remove(name)
    }

    pub fn remove_taxonomy_type(&mut self, name: &str) -> Option<TaxonomyTypeDescriptor> {
        self.taxonomy_types.shift_remove(name)
    }

    pub fn content_type(&self, name: &str) -> Option<&ContentTypeDescriptor> {
        self.content_types.get(name)
    }

    pub fn taxonomy_type(&self, name: &str) -> Option<&TaxonomyTypeDescriptor> {
        self.taxonomy_types.get(name)
    }

    pub fn content_type_by_type_name(&self, type_name: &str) -> Option<&ContentTypeDescriptor> {
        self.content_types().find(|descriptor| descriptor.type_name == type_name)
    }

    pub fn taxonomy_type_by_type_name(&self, type_name: &str) -> Option<&TaxonomyTypeDescriptor> {
        self.taxonomy_types().find(|descriptor| descriptor.type_name == type_name)
    }

    /// Content types in registration order.
    pub fn content_types(&self) -> impl ExactSizeIterator<Item = &ContentTypeDescriptor> {
        self.content_types.values()
    }

    /// Taxonomy types in registration order.
    pub fn taxonomy_types(&self) -> impl ExactSizeIterator<Item = &TaxonomyTypeDescriptor> {
        self.taxonomy_types.values()
    }

    pub(crate) fn validate(&self) -> Result<(), SchemaError> {
        // Terms have no metadata to read meta fields from.
        for descriptor in self.taxonomy_types() {
            if let Some(field) = descriptor.shape.meta_fields.first() {
                return Err(SchemaError::TaxonomyMetaField {
                    type_name: descriptor.type_name.clone(),
                    field: field.clone(),
                });
            }
        }

        let mut seen = types::RESERVED_TYPE_NAMES.iter().copied().collect::<HashSet<_>>();

        let content = self
            .content_types()
            .map(|descriptor| (&descriptor.name, &descriptor.type_name, &descriptor.shape, types::CONTENT_FIELD_NAMES));
        let taxonomy = self
            .taxonomy_types()
            .map(|descriptor| (&descriptor.name, &descriptor.type_name, &descriptor.shape, types::TERM_FIELD_NAMES));

        for (name, type_name, shape, builtin_fields) in content.chain(taxonomy) {
            if !is_valid_name(type_name) {
                return Err(SchemaError::InvalidTypeName {
                    name: name.clone(),
                    type_name: type_name.clone(),
                });
            }

            if !seen.insert(type_name.as_str()) {
                return Err(SchemaError::DuplicateTypeName(type_name.clone()));
            }

            let mut fields = builtin_fields.iter().copied().collect::<HashSet<_>>();
            if shape.hierarchical {
                fields.insert("parent");
            }

            for field in &shape.meta_fields {
                if !is_valid_name(field) || !fields.insert(field.as_str()) {
                    return Err(SchemaError::InvalidFieldName {
                        type_name: type_name.clone(),
                        field: field.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// `post_format` -> `PostFormat`.
pub(crate) fn pascal_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase())
                .into_iter()
                .chain(chars)
        })
        .collect()
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();

    let starts_well = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');

    starts_well && !name.starts_with("__") && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
