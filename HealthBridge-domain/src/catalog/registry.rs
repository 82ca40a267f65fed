use std::collections::HashMap;

use thiserror::Error;

use super::category::Category;
use super::descriptor::FieldDescriptor;
use super::{health_connect, health_kit};
use crate::error::HealthError;
use crate::platform::Platform;

/// Descriptor set violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Duplicate field id: {0}")]
    DuplicateId(String),

    #[error("Field {0} is writable but not readable")]
    WritableNotReadable(String),

    #[error("Field {id} has min {min} not below max {max}")]
    InvalidRange { id: String, min: f64, max: f64 },
}

/// Static catalog of the fields a platform supports
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    /// Build a registry, checking the descriptor invariants
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, RegistryError> {
        for (position, field) in fields.iter().enumerate() {
            if fields[..position].iter().any(|other| other.id == field.id) {
                return Err(RegistryError::DuplicateId(field.id.to_string()));
            }
            if field.writable && !field.readable {
                return Err(RegistryError::WritableNotReadable(field.id.to_string()));
            }
            if let (Some(min), Some(max)) = (field.min_value, field.max_value) {
                if min >= max {
                    return Err(RegistryError::InvalidRange { id: field.id.to_string(), min, max });
                }
            }
        }
        Ok(Self::from_checked(fields))
    }

    /// The built-in catalog of a platform
    pub fn for_platform(platform: Platform) -> Self {
        // Built-in catalogs are checked by the catalog tests
        match platform {
            Platform::Android => Self::from_checked(health_connect::descriptors()),
            Platform::Ios => Self::from_checked(health_kit::descriptors()),
        }
    }

    fn from_checked(mut fields: Vec<FieldDescriptor>) -> Self {
        fields.sort_by_key(|field| (field.category, field.display_order));
        let index = fields.iter().enumerate().map(|(i, field)| (field.id, i)).collect();
        Self { fields, index }
    }

    /// Look up a field
    pub fn describe(&self, field_id: &str) -> Result<&FieldDescriptor, HealthError> {
        self.index
            .get(field_id)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| HealthError::UnknownField(field_id.to_string()))
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.index.contains_key(field_id)
    }

    /// Fields of one category, ascending by display order
    pub fn list_by_category(&self, category: Category) -> Vec<&FieldDescriptor> {
        let mut fields: Vec<&FieldDescriptor> = self.fields.iter().filter(|f| f.category == category).collect();
        fields.sort_by_key(|field| field.display_order);
        fields
    }

    /// Writable fields ascending by display order
    pub fn list_writable(&self) -> Vec<&FieldDescriptor> {
        let mut fields: Vec<&FieldDescriptor> = self.iter().filter(|field| field.writable).collect();
        fields.sort_by_key(|field| field.display_order);
        fields
    }

    /// All fields in category order, or one category
    pub fn list_fields(&self, category: Option<Category>) -> Vec<&FieldDescriptor> {
        match category {
            Some(category) => self.list_by_category(category),
            None => self.iter().collect(),
        }
    }

    /// Non-empty categories with their fields, in display order
    pub fn list_visible(&self) -> Vec<(Category, Vec<&FieldDescriptor>)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.list_by_category(category)))
            .filter(|(_, fields)| !fields.is_empty())
            .collect()
    }

    /// Every field in registry order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Every field id in registry order
    pub fn ids(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.id).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldKind;
    use std::collections::HashSet;

    fn assert_catalog_invariants(registry: &FieldRegistry) {
        let fields = registry.list_fields(None);
        let ids: HashSet<&str> = fields.iter().map(|field| field.id).collect();
        assert_eq!(ids.len(), fields.len(), "field ids must be unique");

        for field in fields {
            assert!(!field.writable || field.readable, "{} writable but not readable", field.id);
            if let (Some(min), Some(max)) = (field.min_value, field.max_value) {
                assert!(min < max, "{} has min {} >= max {}", field.id, min, max);
            }
        }

        // The checked constructor accepts the built-in catalog
        let copy: Vec<FieldDescriptor> = registry.iter().cloned().collect();
        assert!(FieldRegistry::new(copy).is_ok());
    }

    #[test]
    fn test_built_in_catalogs_hold_invariants() {
        assert_catalog_invariants(&FieldRegistry::for_platform(Platform::Android));
        assert_catalog_invariants(&FieldRegistry::for_platform(Platform::Ios));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(FieldRegistry::for_platform(Platform::Android).len(), 36);
        assert!(FieldRegistry::for_platform(Platform::Ios).len() >= 180);
    }

    #[test]
    fn test_describe_unknown_field() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        assert_eq!(registry.describe("height").unwrap().unit, "cm");
        assert_eq!(
            registry.describe("shoeSize").unwrap_err(),
            HealthError::UnknownField("shoeSize".to_string())
        );
    }

    #[test]
    fn test_list_by_category_is_sorted_and_restartable() {
        let registry = FieldRegistry::for_platform(Platform::Ios);
        let first = registry.list_by_category(Category::Body);
        let second = registry.list_by_category(Category::Body);

        assert_eq!(first, second);
        assert!(first.windows(2).all(|pair| pair[0].display_order <= pair[1].display_order));
        assert!(first.iter().all(|field| field.category == Category::Body));
    }

    #[test]
    fn test_list_fields_follows_category_order() {
        let registry = FieldRegistry::for_platform(Platform::Ios);
        let fields = registry.list_fields(None);
        assert!(fields
            .windows(2)
            .all(|pair| (pair[0].category, pair[0].display_order) <= (pair[1].category, pair[1].display_order)));

        let visible = registry.list_visible();
        assert_eq!(visible.len(), Category::ALL.len());
        assert_eq!(visible[0].0, Category::Activity);
    }

    #[test]
    fn test_list_writable_only_returns_writable_fields() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        let writable = registry.list_writable();
        assert!(writable.iter().all(|field| field.writable));
        assert!(!writable.iter().any(|field| field.id == "writeExerciseRoute"));
        assert!(writable.windows(2).all(|pair| pair[0].display_order <= pair[1].display_order));
    }

    #[test]
    fn test_new_rejects_invalid_descriptors() {
        let duplicate = vec![
            FieldDescriptor::new("steps", "Steps", "steps", Category::Activity, 1),
            FieldDescriptor::new("steps", "Steps", "steps", Category::Activity, 2),
        ];
        assert_eq!(
            FieldRegistry::new(duplicate).unwrap_err(),
            RegistryError::DuplicateId("steps".to_string())
        );

        let mut write_only = FieldDescriptor::new("notes", "Notes", "", Category::Other, 1).writable();
        write_only.readable = false;
        assert!(matches!(
            FieldRegistry::new(vec![write_only]),
            Err(RegistryError::WritableNotReadable(_))
        ));

        let inverted = FieldDescriptor::new("weight", "Weight", "kg", Category::Body, 1).range(10.0, 10.0);
        assert!(matches!(
            FieldRegistry::new(vec![inverted]),
            Err(RegistryError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_composite_fields_have_composite_kinds() {
        let registry = FieldRegistry::for_platform(Platform::Android);
        assert_eq!(registry.describe("bloodPressure").unwrap().kind, FieldKind::BloodPressure);
        assert_eq!(registry.describe("cervicalMucus").unwrap().kind, FieldKind::CervicalMucus);
        assert_eq!(registry.describe("menstruationPeriod").unwrap().kind, FieldKind::Interval);
    }
}
