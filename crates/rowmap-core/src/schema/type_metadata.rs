use super::{ColumnMetadata, Property};
use crate::{Error, Result};

use std::collections::HashSet;

/// Mapping metadata for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    type_name: &'static str,

    /// Every described property, in declaration order
    properties: Vec<Property>,

    /// The mapped subset of `properties`, in declaration order
    columns: Vec<ColumnMetadata>,
}

impl TypeMetadata {
    /// Builds metadata from a type's property description.
    ///
    /// Unmapped properties are kept for name lookups but produce no column.
    /// Duplicate property or column names, and mapped properties with neither
    /// a reader nor a writer, are rejected.
    pub fn from_properties(
        type_name: &'static str,
        properties: Vec<Property>,
    ) -> Result<TypeMetadata> {
        let mut property_names = HashSet::new();
        let mut column_names = HashSet::new();
        let mut columns = vec![];

        for property in &properties {
            if !property_names.insert(property.name.as_str()) {
                return Err(Error::metadata(
                    type_name,
                    format!("duplicate property `{}`", property.name),
                ));
            }

            let Some(column) = &property.column else {
                continue;
            };

            if !column_names.insert(column.as_str()) {
                return Err(Error::metadata(
                    type_name,
                    format!("duplicate column `{column}`"),
                ));
            }

            if !property.readable && !property.writable {
                return Err(Error::metadata(
                    type_name,
                    format!(
                        "property `{}` is mapped to `{column}` but has neither a reader nor a writer",
                        property.name
                    ),
                ));
            }

            columns.push(ColumnMetadata {
                property: property.name.clone(),
                column: column.clone(),
                primary_key: property.primary_key,
                ty: property.ty,
                readable: property.readable,
                writable: property.writable,
            });
        }

        Ok(TypeMetadata {
            type_name,
            properties,
            columns,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn column(&self, column: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.column == column)
    }

    /// Properties flagged as primary key, mapped or not.
    pub fn key_properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties.iter().filter(|p| p.primary_key)
    }

    /// Writable properties whose name matches `name` ignoring ASCII case, in
    /// declaration order.
    pub fn writable_properties_ignore_case<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Property> + 'a {
        self.properties
            .iter()
            .filter(move |p| p.writable && p.name.eq_ignore_ascii_case(name))
    }
}
